//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, QbankArgs};
use crate::error::Result;
use crate::session::session::DisplayMessage;

/// Result structure for the categories command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListing {
    pub categories: Vec<String>,
    pub total: usize,
}

/// Per-category statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryStats {
    pub name: String,
    pub records: usize,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_records: usize,
    pub total_categories: usize,
    pub categories: Vec<CategoryStats>,
}

/// Output a category listing in the selected format.
pub fn output_categories(listing: &CategoryListing, args: &QbankArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(listing, args),
        OutputFormat::Human => {
            println!("Available categories ({}):", listing.total);
            for category in &listing.categories {
                println!("  {category}");
            }
            Ok(())
        }
    }
}

/// Output store statistics in the selected format.
pub fn output_stats(stats: &StoreStats, args: &QbankArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(stats, args),
        OutputFormat::Human => {
            println!("Question bank statistics:");
            println!("  Total records:    {}", stats.total_records);
            println!("  Total categories: {}", stats.total_categories);
            println!();
            for category in &stats.categories {
                println!("  {}: {} records", category.name, category.records);
            }
            Ok(())
        }
    }
}

/// Output one chat message in the selected format.
///
/// In human format the "show more" affordance is rendered as a trailing
/// hint line; in JSON the message is emitted as a single object so the
/// flags stay machine-readable.
pub fn output_message(message: &DisplayMessage, args: &QbankArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(message, args),
        OutputFormat::Human => {
            println!("{}", message.text);
            if message.has_more {
                println!("(type 'more' to show the next {} questions)", message.more_count);
            }
            Ok(())
        }
    }
}

/// Output a value as JSON (pretty when requested).
fn output_json<T: Serialize>(result: &T, args: &QbankArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
