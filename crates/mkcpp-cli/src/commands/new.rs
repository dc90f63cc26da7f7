//! Implementation of the `mkcpp new` command: the five-stage orchestrator.
//!
//! Responsibility: sequence the core services in order (dependencies →
//! capture → directories → build script → descriptor), print stage banners,
//! and stop at the first fatal error. No generation logic lives here.

use tracing::{debug, info, instrument};

use mkcpp_adapters::{HomebrewPackageManager, LocalFilesystem, StdinConsole};
use mkcpp_core::{
    application::{CaptureService, DependencyService, GenerateService, TreeService},
    domain::{
        ExceptionSupport, LanguageStandard, ProjectConfiguration, ProjectLayout, Validation,
        classify_exceptions, classify_name, classify_standard,
    },
    render::FormattingContext,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mkcpp new` command.
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // ── Step 1/5: dependencies ────────────────────────────────────────────
    output.step(1, "Verifying build dependencies")?;
    if args.skip_deps {
        output.info("skipped (--skip-deps)")?;
    } else {
        let manager = HomebrewPackageManager::new();
        DependencyService::new(&manager).verify()?;
    }
    output.ok()?;

    // ── Step 2/5: configuration ───────────────────────────────────────────
    output.step(2, "Capturing project configuration")?;
    let project = gather_configuration(&args, &config)?;
    debug!(
        name = project.name(),
        standard = %project.standard(),
        exceptions = %project.exceptions(),
        "configuration captured"
    );
    output.ok()?;

    // ── Step 3/5: directory tree ──────────────────────────────────────────
    output.step(3, "Creating directory tree")?;
    let layout = ProjectLayout::new(project.name());
    let filesystem = LocalFilesystem::new();
    TreeService::new(&filesystem).create_all(&layout, |dir| {
        let _ = output.success(&format!("created {}", dir.display()));
    })?;
    output.ok()?;

    // Formatting state is fixed once, right before the generation engine
    // runs; both artifacts of this run share the same timestamp.
    let ctx = FormattingContext::now();
    let generator = GenerateService::new(&filesystem);

    // ── Step 4/5: build script ────────────────────────────────────────────
    output.step(4, "Generating build script")?;
    let script = generator.write_build_script(&ctx, &layout)?;
    output.success(&format!("wrote {}", script.display()))?;
    output.ok()?;

    // ── Step 5/5: project descriptor ──────────────────────────────────────
    output.step(5, "Generating project descriptor")?;
    let descriptor = generator.write_descriptor(&ctx, &project, &layout)?;
    output.success(&format!("wrote {}", descriptor.display()))?;
    output.ok()?;

    info!(project = project.name(), "generation completed");

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}/mac", project.name()))?;
        output.print("  ./build.sh")?;
    }

    Ok(())
}

// ── Configuration assembly ────────────────────────────────────────────────────

/// Resolve each field from, in priority order: CLI flag, config-file
/// default, interactive prompt.
///
/// Flag and config values take one shot at validation: a bad value is a
/// usage error, never a retry loop. Only the interactive prompts retry.
fn gather_configuration(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectConfiguration> {
    let mut console = StdinConsole::new();
    let mut capture = CaptureService::new(&mut console);

    let name: String = match &args.name {
        Some(value) => seeded(value, classify_name, "--name")?,
        None => capture.capture_name()?,
    };

    let standard: LanguageStandard =
        match seed_value(&args.std, &config.defaults.std, "--std") {
            Some((value, origin)) => seeded(value, classify_standard, origin)?,
            None => capture.capture_standard()?,
        };

    let exceptions: ExceptionSupport =
        match seed_value(&args.exceptions, &config.defaults.exceptions, "--exceptions") {
            Some((value, origin)) => seeded(value, classify_exceptions, origin)?,
            None => capture.capture_exceptions()?,
        };

    ProjectConfiguration::new(name, standard, exceptions).map_err(|e| CliError::Core(e.into()))
}

/// Pick the flag value over the config default, remembering where it came
/// from for the diagnostic.
fn seed_value<'a>(
    flag: &'a Option<String>,
    default: &'a Option<String>,
    flag_label: &'static str,
) -> Option<(&'a str, &'static str)> {
    flag.as_deref()
        .map(|v| (v, flag_label))
        .or_else(|| default.as_deref().map(|v| (v, "config default")))
}

/// Validate a pre-seeded answer exactly like prompt input, but without the
/// retry loop.
fn seeded<T>(
    value: &str,
    classify: impl Fn(&str) -> Validation<T>,
    origin: &str,
) -> CliResult<T> {
    match classify(value) {
        Validation::Accepted(v) => Ok(v),
        Validation::Rejected(reason) => Err(CliError::InvalidInput {
            message: format!("{origin} '{value}': {reason}"),
        }),
    }
}
