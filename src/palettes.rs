// ColorBrewer single-hue sequential schemes, 3 to 9 classes each.
// Colors from https://colorbrewer2.org/ (Apache License 2.0, Cynthia A. Brewer).

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

/// Smallest number of classes a Brewer scheme is defined for.
pub(crate) const MIN_CLASSES: usize = 3;
/// Largest number of classes a Brewer scheme is defined for.
pub(crate) const MAX_CLASSES: usize = 9;

lazy_static! {
  pub(crate) static ref BLUES: Vec<PaletteData> = vec![
    seq(&[0xdeebf7, 0x9ecae1, 0x3182bd]),
    seq(&[0xeff3ff, 0xbdd7e7, 0x6baed6, 0x2171b5]),
    seq(&[0xeff3ff, 0xbdd7e7, 0x6baed6, 0x3182bd, 0x08519c]),
    seq(&[0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x3182bd, 0x08519c]),
    seq(&[0xeff3ff, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5,
          0x084594]),
    seq(&[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6,
          0x2171b5, 0x084594]),
    seq(&[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6,
          0x2171b5, 0x08519c, 0x08306b]),
  ];
}

lazy_static! {
  pub(crate) static ref GREENS: Vec<PaletteData> = vec![
    seq(&[0xe5f5e0, 0xa1d99b, 0x31a354]),
    seq(&[0xedf8e9, 0xbae4b3, 0x74c476, 0x238b45]),
    seq(&[0xedf8e9, 0xbae4b3, 0x74c476, 0x31a354, 0x006d2c]),
    seq(&[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x31a354, 0x006d2c]),
    seq(&[0xedf8e9, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45,
          0x005a32]),
    seq(&[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d,
          0x238b45, 0x005a32]),
    seq(&[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d,
          0x238b45, 0x006d2c, 0x00441b]),
  ];
}

lazy_static! {
  pub(crate) static ref GREYS: Vec<PaletteData> = vec![
    seq(&[0xf0f0f0, 0xbdbdbd, 0x636363]),
    seq(&[0xf7f7f7, 0xcccccc, 0x969696, 0x525252]),
    seq(&[0xf7f7f7, 0xcccccc, 0x969696, 0x636363, 0x252525]),
    seq(&[0xf7f7f7, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x636363, 0x252525]),
    seq(&[0xf7f7f7, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252,
          0x252525]),
    seq(&[0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373,
          0x525252, 0x252525]),
    seq(&[0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373,
          0x525252, 0x252525, 0x000000]),
  ];
}

lazy_static! {
  pub(crate) static ref ORANGES: Vec<PaletteData> = vec![
    seq(&[0xfee6ce, 0xfdae6b, 0xe6550d]),
    seq(&[0xfeedde, 0xfdbe85, 0xfd8d3c, 0xd94701]),
    seq(&[0xfeedde, 0xfdbe85, 0xfd8d3c, 0xe6550d, 0xa63603]),
    seq(&[0xfeedde, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xe6550d, 0xa63603]),
    seq(&[0xfeedde, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801,
          0x8c2d04]),
    seq(&[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913,
          0xd94801, 0x8c2d04]),
    seq(&[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913,
          0xd94801, 0xa63603, 0x7f2704]),
  ];
}

lazy_static! {
  pub(crate) static ref PURPLES: Vec<PaletteData> = vec![
    seq(&[0xefedf5, 0xbcbddc, 0x756bb1]),
    seq(&[0xf2f0f7, 0xcbc9e2, 0x9e9ac8, 0x6a51a3]),
    seq(&[0xf2f0f7, 0xcbc9e2, 0x9e9ac8, 0x756bb1, 0x54278f]),
    seq(&[0xf2f0f7, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x756bb1, 0x54278f]),
    seq(&[0xf2f0f7, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3,
          0x4a1486]),
    seq(&[0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba,
          0x6a51a3, 0x4a1486]),
    seq(&[0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba,
          0x6a51a3, 0x54278f, 0x3f007d]),
  ];
}

lazy_static! {
  pub(crate) static ref REDS: Vec<PaletteData> = vec![
    seq(&[0xfee0d2, 0xfc9272, 0xde2d26]),
    seq(&[0xfee5d9, 0xfcae91, 0xfb6a4a, 0xcb181d]),
    seq(&[0xfee5d9, 0xfcae91, 0xfb6a4a, 0xde2d26, 0xa50f15]),
    seq(&[0xfee5d9, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xde2d26, 0xa50f15]),
    seq(&[0xfee5d9, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d,
          0x99000d]),
    seq(&[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c,
          0xcb181d, 0x99000d]),
    seq(&[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c,
          0xcb181d, 0xa50f15, 0x67000d]),
  ];
}
