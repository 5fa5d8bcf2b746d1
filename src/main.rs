use clap::Parser;
use polygon_area::read_polygon::read_polygons;
use polygon_area::{measure_with, AreaRecords, LabelFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Area of the polygons in GeoJSON, KML or GPX files")]
struct Cli {
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Decimals shown for km² labels.
    #[arg(long, default_value_t = 2)]
    decimals_km2: usize,
    /// List the largest polygon first.
    #[arg(long)]
    sort: bool,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();
    let format = LabelFormat {
        km2_decimals: args.decimals_km2,
        ..LabelFormat::default()
    };

    let mut records = AreaRecords::new();
    let mut failed = Vec::new();
    for path in &args.paths {
        let polygons = match read_polygons(path) {
            Ok(p) => p,
            Err(e) => {
                log::error!("{}", e);
                continue;
            }
        };
        for (i, polygon) in polygons.iter().enumerate() {
            polygon.info();
            let id = format!("{}#{}", path.display(), i + 1);
            match measure_with(polygon, &format) {
                Ok(m) => {
                    if let Some(z) = m.zone {
                        log::debug!("{}: zone {}", id, z);
                    }
                    records.upsert(&id, m.area);
                }
                Err(e) => {
                    log::warn!("{}: {}", id, e);
                    failed.push(id);
                }
            }
        }
    }

    let rows: Vec<_> = if args.sort {
        records.sorted()
    } else {
        records.iter().collect()
    };
    for (n, r) in rows.iter().enumerate() {
        let label = format.format(r.area).unwrap_or_else(|_| "n/a".to_string());
        println!("Polygon {:>3}  {:>16}  {}", n + 1, label, r.id);
    }
    for id in &failed {
        println!("{:>28}  {}", "n/a", id);
    }
}
