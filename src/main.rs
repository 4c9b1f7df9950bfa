use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::info;

use clickup_tasks::backend::factory::create_backend;
use clickup_tasks::cli::Cli;
use clickup_tasks::config::Config;
use clickup_tasks::constants::CACHE_CLEARED;
use clickup_tasks::filter::filter_tasks;
use clickup_tasks::logger;
use clickup_tasks::ordering::sort_tasks;
use clickup_tasks::storage::CacheStore;
use clickup_tasks::sync::{storage::load_snapshot, SyncService};
use clickup_tasks::ui::{self, TableStyles};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let log_file = config.log_file().ok();
    logger::init(&config.logging, log_file.as_deref(), cli.verbose)?;
    let styles = TableStyles::from_config(&config.style)?;

    let store = CacheStore::new(config.cache_dir()?);
    if cli.clear_cache {
        store.clear().await?;
        eprintln!("{}: {}", CACHE_CLEARED, store.root().display());
    }

    let snapshot = if cli.sync || config.sync.always {
        let backend = create_backend("clickup", &config.api)?;
        SyncService::new(backend, store).sync().await?
    } else {
        load_snapshot(&store).await?
    };

    let resolver = snapshot.resolver();
    let filter = cli.filter();
    let mut tasks = filter_tasks(snapshot.tasks, &filter, &resolver);
    sort_tasks(&mut tasks);
    info!("Displaying {} tasks", tasks.len());

    let rows = ui::build_rows(&tasks, &resolver, &Local::now());
    ui::print_table(&rows, &styles)
}
