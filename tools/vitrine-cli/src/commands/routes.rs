//! Navigation table commands.

use anyhow::Result;
use serde::Serialize;
use vitrine_router::Route;

use super::RoutesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct RouteRow {
    name: &'static str,
    href: String,
    title: &'static str,
    admin: bool,
}

/// Run the routes command.
pub fn run(args: RoutesArgs, ctx: &Context) -> Result<()> {
    let router = ctx.router();

    if let Some(location) = args.resolve {
        let route = router.resolve(&location)?;
        if ctx.output.is_json() {
            ctx.output.json(&route.meta());
        } else {
            ctx.output
                .success(&format!("{} -> {} ({})", location, route.name(), route.title()));
        }
        return Ok(());
    }

    let rows: Vec<RouteRow> = Route::all()
        .into_iter()
        .map(|r| RouteRow {
            name: r.name(),
            href: router.href(r),
            title: r.title(),
            admin: r.is_admin(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Rotas");
    let widths = [12, 24, 24];
    ctx.output.table_row(&["NAME", "PATH", "VIEW"], &widths);
    for row in &rows {
        ctx.output
            .table_row(&[row.name, row.href.as_str(), row.title], &widths);
    }
    ctx.output.info("Admin routes are not guarded");

    Ok(())
}
