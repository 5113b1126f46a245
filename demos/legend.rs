//! Classify synthetic census tracts and write their legends to
//! `legend.html`.  A JSON map configuration may be given as argument.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use choropleth_brewery::{Feature, FeatureCollection, FeatureStyle, Legend,
                         LayerSet, MapConfig, RGBColor, tooltip};
use serde_json::json;

type Err = Box<dyn Error>;

/// A deterministic, skewed series of `n` values in `[lo, hi]`.
fn tracts(property: &str, n: usize, lo: f64, hi: f64) -> FeatureCollection {
    let features = (0 .. n).map(|i| {
        let t = ((i * 7919) % n) as f64 / (n - 1) as f64;
        let mut f = Feature::default();
        f.properties.insert("namelsad".into(),
                            json!(format!("Census Tract {}", i + 1)));
        f.properties.insert(property.into(), json!(lo + (hi - lo) * t * t));
        f
    }).collect();
    FeatureCollection { features, ..Default::default() }
}

fn legend_table(fh: &mut impl Write, legend: &Legend) -> Result<(), Err> {
    writeln!(fh, "<h3>{}</h3>", legend.title)?;
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 4px\">")?;
    for e in &legend.entries {
        writeln!(fh, "  <tr><td style=\"width: 40px; height: 20px; \
                      background-color: {}\"></td><td>{e}</td></tr>",
                 e.color.to_hex())?;
    }
    writeln!(fh, "  <tr><td style=\"width: 40px; height: 20px; \
                  background-color: {}\"></td><td>Parks &amp; Greenways\
                  </td></tr>",
             FeatureStyle::greenspace().fill.to_hex())?;
    writeln!(fh, "</table>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt::init();
    let config = match env::args().nth(1) {
        Some(path) => MapConfig::load(path)?,
        None => MapConfig::default(),
    };
    let datasets: Vec<_> = config.layers.iter()
        .map(|l| match l.property.as_str() {
            "percent_be" => tracts(&l.property, 40, 0.02, 0.45),
            "median_inc" => tracts(&l.property, 40, 18_000., 120_000.),
            _ => tracts(&l.property, 40, 450., 2_100.),
        })
        .collect();
    let mut set = LayerSet::classify(&config, datasets);

    let mut fh = BufWriter::new(File::create("legend.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Choropleth legends</title>\n\
                  </head>\n\
                  <body>")?;
    let titles: Vec<_> = set.layers().iter().map(|l| l.title.clone()).collect();
    for title in &titles {
        if let Some(legend) = set.activate(title) {
            legend_table(&mut fh, &legend)?;
            println!("{}\n", legend.render_text());
        }
        if let Some(f) = set.get(title).and_then(|l| l.features.first()) {
            if let Some(t) = tooltip(f, &config.name_property) {
                writeln!(fh, "<p>{t}</p>")?;
            }
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
