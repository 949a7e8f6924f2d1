use crate::card::card_model::PreviewOutcome;
use crate::card::renderer::{guard_preview, render_preview, RenderOptions};
use crate::extract::descriptor::{sample_preview, PathDescriptor};
use crate::extract::extractor::extract_paths_from;
use crate::mapping::mapping_model::CardType;
use crate::mapping::store::MappingStore;
use crate::mapping::suggest::suggest_mapping;
use crate::preview::console::format_console_preview;
use crate::preview::html::generate_html_preview;
use crate::source::fetcher::{load_response, load_yaml};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// paths subcommand
// ============================================================================

pub fn cmd_paths(
    input: &str,
    base: Option<&str>,
    format: &str,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Extracting field paths from {}...", input);
    }

    let response = load_response(input)?;
    let descriptors = extract_paths_from(&response, base.unwrap_or(""));

    tracer.log(
        &TraceEvent::stage("paths")
            .with_input(input)
            .with_path_count(descriptors.len()),
    );

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&descriptors)?),
        _ => print!("{}", format_paths_table(&descriptors)),
    }

    Ok(())
}

/// Format descriptors as an aligned two-column table with sample previews.
pub fn format_paths_table(descriptors: &[PathDescriptor]) -> String {
    let mut out = String::new();

    if descriptors.is_empty() {
        out.push_str("No addressable fields found.\n");
        return out;
    }

    // Width in characters, not bytes, so multi-byte paths stay aligned.
    let path_width = descriptors
        .iter()
        .map(|d| d.path.chars().count())
        .max()
        .unwrap_or(0)
        .max("PATH".len());

    out.push_str(&format!("{:<width$}  TYPE\n", "PATH", width = path_width));
    for d in descriptors {
        out.push_str(&format!(
            "{:<width$}  {} ({})\n",
            d.path,
            d.kind,
            sample_preview(&d.sample),
            width = path_width
        ));
    }
    out.push_str(&format!("\n{} path(s)\n", descriptors.len()));

    out
}

// ============================================================================
// preview subcommand
// ============================================================================

pub fn cmd_preview(
    input: &str,
    mapping_path: &str,
    card_type: Option<&str>,
    format: &str,
    output: Option<&str>,
    max_images: usize,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Rendering {} preview from {}...", format, input);
    }

    let opts = RenderOptions { max_images };
    let outcome = guard_preview(preview_pipeline(input, mapping_path, card_type, &opts));

    let mut event = TraceEvent::stage("preview").with_input(input);
    if let PreviewOutcome::Cards(grid) = &outcome {
        event = event.with_card_type(grid.card_type).with_grid(grid);
    }
    tracer.log(&event);

    let content = match format {
        "html" => generate_html_preview(&outcome),
        _ => format_console_preview(&outcome),
    };

    match output {
        Some(path) => std::fs::write(path, &content)?,
        None => print!("{}", content),
    }

    Ok(())
}

/// The fallible part of the preview: load the response and mapping, then
/// render. Wrapped by [`guard_preview`] so failures surface as an error
/// panel rather than an exit.
fn preview_pipeline(
    input: &str,
    mapping_path: &str,
    card_type: Option<&str>,
    opts: &RenderOptions,
) -> Result<crate::card::card_model::CardGrid, Box<dyn std::error::Error>> {
    let response = load_response(input)?;
    let mut store: MappingStore = load_yaml(mapping_path)?;

    if let Some(name) = card_type {
        store.card_type = parse_card_type(name)?;
    }

    Ok(render_preview(&store, &response, opts))
}

// ============================================================================
// suggest subcommand
// ============================================================================

pub fn cmd_suggest(
    input: &str,
    card_type: &str,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let card_type = parse_card_type(card_type)?;
    let response = load_response(input)?;
    let descriptors = extract_paths_from(&response, "");

    if verbose > 0 {
        eprintln!(
            "Discovered {} paths; matching {} card fields...",
            descriptors.len(),
            card_type
        );
    }

    let mut store = MappingStore::new(card_type);
    *store.mapping_mut(card_type) = suggest_mapping(&descriptors, card_type);

    tracer.log(
        &TraceEvent::stage("suggest")
            .with_input(input)
            .with_card_type(card_type)
            .with_path_count(descriptors.len()),
    );

    let yaml = serde_yaml::to_string(&store)?;
    match output {
        Some(path) => {
            std::fs::write(path, &yaml)?;
            println!("Wrote mapping to {}", path);
        }
        None => print!("{}", yaml),
    }

    if verbose > 0 {
        eprintln!("Mapping fingerprint: {}", store.fingerprint());
    }

    Ok(())
}

fn parse_card_type(name: &str) -> Result<CardType, Box<dyn std::error::Error>> {
    CardType::parse(name)
        .ok_or_else(|| format!("Unknown card type '{}' (expected product, blog, or property)", name).into())
}
