//! Summarizes a park dataset: the year keys the time slider would offer,
//! the global value bounds, and the legend class breakpoints.

use std::path::PathBuf;

use clap::Parser;
use parkmap::legend;
use parkmap::park::ParkCollection;
use parkmap::summary::DataSummary;

#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// Path to a GeoJSON FeatureCollection
    #[clap(required_unless_present = "url", conflicts_with = "url")]
    path: Option<PathBuf>,

    /// Fetch the dataset from a URL instead of a file
    #[clap(long)]
    url: Option<String>,

    /// Log level specification, e.g. `info` or `parkmap=debug`
    #[clap(long, default_value = "info")]
    log: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = flexi_logger::Logger::try_with_str(&args.log)?.start()?;

    let collection = match (&args.path, &args.url) {
        (Some(path), None) => {
            log::debug!("reading {}", path.display());
            ParkCollection::parse(&std::fs::read_to_string(path)?)?
        },
        (None, Some(url)) => parkmap::fetch::get_parks(url).await?.0,
        _ => unreachable!("clap enforces exactly one input"),
    };
    if collection.is_empty() {
        return Err("dataset contains no parks".into());
    }

    let summary = DataSummary::of(&collection);
    let classes = legend::classes(summary.min, summary.max);
    let output = serde_json::json!({
        "parks": collection.len(),
        "timestamps": summary.timestamps,
        "min": summary.min,
        "max": summary.max,
        "legend_classes": classes,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
