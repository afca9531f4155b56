//! A stock-analysis shell's route table, declared and driven.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example spa
//!
//! Simulates what a browser shell does on every navigation: read the
//! location hash, ask the registry which route it is, force the view
//! reference, render. The two overseas desks ship later — their views
//! stay unbuilt until somebody actually visits them.

use waypost::{Registry, RouteDefinition, ViewRef, bootstrap, path};

/// The "renderable unit" here is just a template name. A real shell
/// would store a component constructor; the registry doesn't care.
#[derive(Debug)]
struct Screen(&'static str);

fn main() {
    tracing_subscriber::fmt::init();

    let registry = Registry::register([
        RouteDefinition::new("/", "Home", ViewRef::eager(Screen("home"))),
        // A-share desks
        RouteDefinition::new(
            "/analysis/a-stock/individual",
            "AStockIndividual",
            ViewRef::eager(Screen("individual-stock-analysis")),
        )
        .meta("market", "A股")
        .meta("type", "个股分析"),
        RouteDefinition::new(
            "/analysis/a-stock/portfolio",
            "AStockPortfolio",
            ViewRef::eager(Screen("portfolio-analysis")),
        )
        .meta("market", "A股")
        .meta("type", "投资组合"),
        RouteDefinition::new(
            "/analysis/a-stock/market",
            "AStockMarket",
            ViewRef::eager(Screen("market-perception")),
        )
        .meta("market", "A股")
        .meta("type", "市场感知"),
        // Overseas desks: declared now, built on first visit
        RouteDefinition::new(
            "/analysis/hk-stock",
            "HkStock",
            ViewRef::deferred(|| Screen("coming-soon")),
        )
        .meta("market", "港股"),
        RouteDefinition::new(
            "/analysis/us-stock",
            "UsStock",
            ViewRef::deferred(|| Screen("coming-soon")),
        )
        .meta("market", "美股"),
        RouteDefinition::new("/reports", "Reports", ViewRef::eager(Screen("reports"))),
        RouteDefinition::new(
            "/quantitative",
            "Quantitative",
            ViewRef::eager(Screen("quantitative")),
        ),
    ])
    .expect("route table is statically known and duplicate-free");

    bootstrap::install(registry).expect("first and only install");
    let routes = bootstrap::current().expect("installed above");

    // Nav sidebar: one section per market tag.
    for market in ["A股", "港股", "美股"] {
        println!("{market}:");
        for route in routes.routes_tagged("market", market) {
            let kind = route.meta_value("type").unwrap_or("敬请期待");
            println!("  {:<30} {}", route.path(), kind);
        }
    }
    println!();

    // A browsing session, straight off the location bar.
    let visits = [
        "https://example.com/app/index.html#/",
        "https://example.com/app/index.html#/analysis/a-stock/individual",
        "https://example.com/app/index.html#/reports?market=A股",
        "https://example.com/app/index.html#/analysis/hk-stock",
        "https://example.com/app/index.html#/metaverse",
    ];

    for url in visits {
        let target = path::hash_path(url);
        match routes.resolve(target) {
            Some(route) => {
                // Forcing the view is the shell's move. First visit to a
                // deferred route builds it; ever after it's a cheap read.
                let screen = route
                    .view()
                    .downcast_ref::<Screen>()
                    .expect("every view in this table is a Screen");
                println!("{target:<35} → render {:?} ({})", screen, route.name());
            }
            None => println!("{target:<35} → 404 screen, shell's choice"),
        }
    }
}
