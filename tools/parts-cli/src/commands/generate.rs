//! Generate command - writes a sample catalog document.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use parts_catalog::catalog::CatalogDocument;

use super::GenerateArgs;
use crate::context::Context;
use crate::generator::Generator;

/// Run the generate command.
pub async fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let output_path = ctx.resolve_path(args.output.as_ref().unwrap_or(&ctx.config.generator.output));
    let seed = args.seed.or(ctx.config.generator.seed);

    if output_path.exists() && !args.yes {
        if ctx.output.is_json() {
            bail!(
                "{} already exists. Use --yes to overwrite.",
                output_path.display()
            );
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", output_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Generation cancelled");
            return Ok(());
        }
    }

    ctx.output.header("Generating catalog");
    if let Some(seed) = seed {
        ctx.output.debug(&format!("Using seed {}", seed));
    }

    let pb = ctx
        .output
        .progress(Generator::total_products() as u64, "products");
    let today = chrono::Local::now().date_naive();
    let document = Generator::new(seed).generate(today, |_| pb.inc(1));
    pb.finish_and_clear();

    let json = document.to_json_pretty()?;
    fs::write(&output_path, json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    tracing::info!(
        path = %output_path.display(),
        products = document.products.len(),
        "catalog written"
    );

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": output_path.display().to_string(),
            "seed": seed,
            "totalProducts": document.products.len(),
            "categories": document.categories,
            "brands": document.brands,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "Generated {} products: {}",
        document.products.len(),
        output_path.display()
    ));
    print_distribution(ctx, &document);

    Ok(())
}

fn print_distribution(ctx: &Context, document: &CatalogDocument) {
    let total = document.products.len().max(1) as f64;

    ctx.output.header("Category distribution");
    for category in &document.categories {
        ctx.output.list_item(&format!(
            "{}: {} products ({:.1}%)",
            category.id,
            category.count,
            category.count as f64 / total * 100.0
        ));
    }

    ctx.output.header("Brand distribution");
    for brand in &document.brands {
        ctx.output
            .list_item(&format!("{}: {} products", brand.name, brand.count));
    }
}
