//! Quoting and lookup commands: quote, resolve, regions, zones

use super::util::{print_json, Context};
use shipzone::*;

pub fn cmd_quote(
    ctx: &Context,
    state: &str,
    city: Option<&str>,
    subtotal: f64,
    items: u32,
) -> Result<()> {
    let mut destination = Destination::new(state);
    if let Some(city) = city {
        destination = destination.with_locality(city);
    }
    let order = OrderStats {
        subtotal,
        item_count: items,
    };

    let summary = CheckoutSummary::new(&ctx.engine, &destination, &order);
    if ctx.json {
        return print_json(&summary);
    }

    let quote = &summary.quote;
    println!("To:          {}, {}", city.unwrap_or("(no city)"), state);
    match &quote.zone {
        Some(zone) => println!("Zone:        {} (zone {})", zone.name, zone.ordinal),
        None => println!("Zone:        none (catalog has no zone for this destination)"),
    }
    println!("Estimated:   {}", quote.estimated_window);
    if let Some(tier) = quote.tier {
        println!("Tier:        {} ({} item(s))", tier, items);
    }
    println!("Subtotal:    {}", ctx.money(summary.subtotal));
    println!("Delivery:    {}", ctx.fee(summary.delivery_fee));
    println!("Total:       {}", ctx.money(summary.total));

    if summary.free_shipping {
        println!(
            "✓ Free delivery on orders from {}",
            ctx.money(ctx.catalog().free_shipping_threshold)
        );
    } else if summary.amount_to_free_shipping > 0.0 {
        println!(
            "  Add {} more for free delivery",
            ctx.money(summary.amount_to_free_shipping)
        );
    }
    if !quote.matched {
        println!("⚠ '{}' matched no zone; priced as the most remote zone", state.trim());
    }
    Ok(())
}

pub fn cmd_resolve(ctx: &Context, state: &str, city: Option<&str>) -> Result<()> {
    let resolver = ctx.engine.resolver();
    let resolution = resolver.resolve(state, city);

    if ctx.json {
        return print_json(&serde_json::json!({
            "region": state,
            "locality": city,
            "zone": resolution.zone,
            "match": resolution.kind,
            "matched": resolution.matched(),
            "inside_home_city": city.map(|c| resolver.is_inside_home_city(c)),
        }));
    }

    let how = match resolution.kind {
        MatchKind::HomeCity => format!("inside {}", ctx.catalog().home_city),
        MatchKind::HomeRegion => format!(
            "{} outside {}",
            ctx.catalog().home_region,
            ctx.catalog().home_city
        ),
        MatchKind::Region { member } => format!("matched '{}'", member),
        MatchKind::Fallback => "no match, fallback zone".to_string(),
        MatchKind::Unresolved => "catalog has no zone".to_string(),
    };

    match resolution.zone {
        Some(zone) => println!(
            "{} → zone {} {} [{}] ({})",
            state.trim(),
            zone.ordinal,
            zone.name,
            zone.estimated_window,
            how
        ),
        None => println!("{} → no zone ({})", state.trim(), how),
    }
    Ok(())
}

pub fn cmd_regions(ctx: &Context) -> Result<()> {
    let regions = ctx.engine.all_regions();
    if ctx.json {
        return print_json(&regions);
    }
    for region in regions {
        println!("{}", region);
    }
    Ok(())
}

pub fn cmd_zones(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let mut zones: Vec<&Zone> = catalog.zones.iter().collect();
    zones.sort_by_key(|z| z.ordinal);

    if ctx.json {
        return print_json(&zones);
    }

    println!(
        "{:>3}  {:<28} {:>10} {:>10} {:>10}  {}",
        "#", "ZONE", "LIGHT", "MEDIUM", "HEAVY", "WINDOW"
    );
    for zone in zones {
        println!(
            "{:>3}  {:<28} {:>10} {:>10} {:>10}  {}",
            zone.ordinal,
            zone.name,
            ctx.money(zone.light_fee),
            ctx.money(zone.medium_fee),
            ctx.money(zone.heavy_fee),
            zone.estimated_window
        );
        println!("     {}", zone.member_regions.join(", "));
    }

    println!();
    println!(
        "Tiers: light ≤ {} items < medium ≤ {} items < heavy",
        catalog.tiers.medium_above, catalog.tiers.heavy_above
    );
    println!(
        "Free delivery from {}  ·  catalog {}",
        ctx.money(catalog.free_shipping_threshold),
        catalog.hash()
    );
    Ok(())
}
