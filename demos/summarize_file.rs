// Summarize one sample batch file and print the bundle as JSON.
//
// Usage: cargo run --example summarize_file -- [SAMPLES_PATH] [UTC_OFFSET_HOURS]
//   SAMPLES_PATH      default: ./data/samples.json
//   UTC_OFFSET_HOURS  default: 19

use perfsummary::sample_repo::SampleRepo;
use perfsummary::summary::{SummaryOptions, build_summary};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("./data/samples.json");
    let options = SummaryOptions {
        utc_offset_hours: args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(SummaryOptions::default().utc_offset_hours),
    };

    let repo = SampleRepo::new(path, usize::MAX);
    let batch = repo.get_samples().await?;
    let summary = build_summary(&batch.samples, &options)?.with_reported_update(batch.last_updated);

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
