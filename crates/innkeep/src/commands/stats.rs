//! Statistics command handlers.

use serde_json::{Map, Value};

use innkeep_api::ApiClient;

use crate::cli::{GlobalOpts, StatsArgs, StatsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

/// Key/value detail for table output; nested breakdowns stay inline JSON.
fn render_stats(stats: &Map<String, Value>, global: &GlobalOpts) -> String {
    output::render_single(&global.output, stats, output::detail_map, |s| {
        s.keys().cloned().collect::<Vec<_>>().join("\n")
    })
}

pub async fn handle(
    client: &ApiClient,
    args: StatsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    util::require_login(client)?;
    let statistics = client.statistics();

    let stats = match args.command {
        StatsCommand::Today => statistics.today().await?,
        StatsCommand::Range { start, end } => {
            if start > end {
                return Err(CliError::Validation {
                    field: "start".into(),
                    reason: "start must be <= end".into(),
                });
            }
            statistics.date_range(start, end).await?
        }
        StatsCommand::RoomTypes => statistics.room_types().await?,
    };

    output::print_output(&render_stats(&stats, global), global.quiet);
    Ok(())
}
