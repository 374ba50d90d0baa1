use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use pricelist_ingest::{Catalog, load_catalog};
use pricelist_model::AliasTable;
use pricelist_report::ReportOptions;
use tracing::{info, info_span};

use pricelist_cli::export::{ExportStatus, default_report_path, export_report};
use pricelist_cli::listing::aliases_table;
use pricelist_cli::session::Session;

use crate::cli::{AliasArgs, CatalogArgs, SearchArgs};

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let catalog = load(&args.catalog)?;

    let span = info_span!("session", exit_word = %args.exit_word);
    let end = span.in_scope(|| {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(catalog.records(), stdin.lock(), stdout.lock())
            .with_exit_word(&args.exit_word);
        let end = session.run();
        info!(queries = session.queries(), "session ended");
        end
    })?;
    info!(?end, "search finished");

    let mut stdout = io::stdout().lock();
    export(&mut stdout, &args.catalog, &catalog)?;
    writeln!(stdout, "Done.")?;
    Ok(())
}

pub fn run_export(args: &CatalogArgs) -> Result<()> {
    let catalog = load(args)?;
    let mut stdout = io::stdout().lock();
    match export(&mut stdout, args, &catalog)? {
        ExportStatus::Failed(message) => bail!("export failed: {message}"),
        ExportStatus::Written { .. } | ExportStatus::Empty => Ok(()),
    }
}

pub fn run_aliases(args: &AliasArgs) -> Result<()> {
    let aliases = load_aliases(args.aliases.as_deref())?;
    println!("{}", aliases_table(&aliases));
    Ok(())
}

fn load(args: &CatalogArgs) -> Result<Catalog> {
    let aliases = load_aliases(args.aliases.as_deref())?;
    let span = info_span!("load", source_dir = %args.source_dir.display());
    let (catalog, summary) = span
        .in_scope(|| load_catalog(&args.source_dir, aliases))
        .with_context(|| format!("load price lists from {}", args.source_dir.display()))?;
    info!(
        files = summary.files.len(),
        rows = summary.total_rows(),
        "catalog ready"
    );
    Ok(catalog)
}

fn load_aliases(path: Option<&Path>) -> Result<AliasTable> {
    match path {
        Some(path) => {
            AliasTable::load(path).with_context(|| format!("load alias table {}", path.display()))
        }
        None => Ok(AliasTable::default()),
    }
}

fn export<W: Write>(out: &mut W, args: &CatalogArgs, catalog: &Catalog) -> Result<ExportStatus> {
    let path = report_path(args);
    let options = ReportOptions {
        page_size: args.page_size,
        title: args.title.clone(),
        ..ReportOptions::default()
    };
    let _guard = info_span!("export", path = %path.display()).entered();
    export_report(out, &path, catalog.records(), &options)
}

fn report_path(args: &CatalogArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| default_report_path(&args.source_dir))
}
