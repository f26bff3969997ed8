/*
[INPUT]:  EZRENTOUT_API_KEY / EZRENTOUT_SUBDOMAIN environment variables
[OUTPUT]: Group listing printed for the configured tenant
[POS]:    Demos - classification browsing
[UPDATE]: When group endpoints change
*/

use ezrentout_client::EzRentOutClient;

/// Example: list the tenant's asset classification groups.
///
/// Requires a live tenant; set EZRENTOUT_API_KEY and EZRENTOUT_SUBDOMAIN.
#[tokio::main]
async fn main() {
    let client = match EzRentOutClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Checking API status...");
    match client.check_status().await {
        Ok(status) => println!("✓ Status: {:?}", status.status),
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    println!("\nListing groups (page 1)...");
    match client.get_all_groups(1, None).await {
        Ok(page) => {
            println!("✓ {} group(s), {} page(s)", page.data.len(), page.total_pages);
            for entry in &page.data {
                println!("  - {:?} {}", entry.id(), entry.name());
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
