use std::path::{Path, PathBuf};
use std::process;

use sbom_export::adapters::outbound::console::ConsoleReporter;
use sbom_export::adapters::outbound::filesystem::{FileSystemSbomStore, FileSystemWriter};
use sbom_export::adapters::outbound::network::RestProjectRepository;
use sbom_export::application::dto::ExportRequest;
use sbom_export::application::use_cases::{
    ClassifyProjectsUseCase, ExportSbomsUseCase, MergeSbomsUseCase,
};
use sbom_export::cli::{Cli, Commands};
use sbom_export::config::Config;
use sbom_export::ports::outbound::OutputPresenter;
use sbom_export::shared::error::ExitCode;
use sbom_export::shared::Result;

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(cli) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    let reporter = ConsoleReporter::new();
    let store = FileSystemSbomStore::current_dir();

    match cli.command {
        Commands::Projects => {
            let config = Config::resolve(cli.org)?;
            let repository = RestProjectRepository::new(&config)?;
            let use_case = ClassifyProjectsUseCase::new(&repository, &reporter);
            use_case.execute(&config.org_id)?;
        }

        Commands::Fetch { project_id } => {
            let config = Config::resolve(cli.org)?;
            let repository = RestProjectRepository::new(&config)?;
            let use_case = ExportSbomsUseCase::new(&repository, &store, &reporter, config);
            let path = use_case.fetch_one(&project_id, Path::new("."))?;
            eprintln!("✅ Output complete: {}", path.display());
        }

        Commands::Export { skip_unsupported } => {
            let config = Config::resolve(cli.org)?;
            let repository = RestProjectRepository::new(&config)?;
            let use_case = ExportSbomsUseCase::new(&repository, &store, &reporter, config);
            use_case.execute(&ExportRequest::new(skip_unsupported))?;
        }

        Commands::Merge { dir, output } => {
            merge_directory(&store, &dir, output)?;
        }

        Commands::Run {
            skip_unsupported,
            output,
        } => {
            let config = Config::resolve(cli.org)?;
            let repository = RestProjectRepository::new(&config)?;

            let classify = ClassifyProjectsUseCase::new(&repository, &reporter);
            classify.execute(&config.org_id)?;

            let export = ExportSbomsUseCase::new(&repository, &store, &reporter, config);
            let summary = export.execute(&ExportRequest::new(skip_unsupported))?;

            merge_directory(&store, &summary.directory, output)?;
        }
    }

    Ok(())
}

fn merge_directory(store: &FileSystemSbomStore, dir: &Path, output: PathBuf) -> Result<()> {
    let use_case = MergeSbomsUseCase::new(store);
    let merged = use_case.execute(dir)?;

    let presenter = FileSystemWriter::new(output);
    presenter.present(&merged.to_pretty_json()?)?;
    Ok(())
}
