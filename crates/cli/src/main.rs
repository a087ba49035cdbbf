use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convex2::ConvexPolygon;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex polygon hull, intersection, and area runner")]
struct Cmd {
    /// Emit a machine-readable JSON report instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect two convex polygons and report vertices and area
    Intersect {
        /// Input file (two counts, then coordinate pairs); stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Convex hull of one point set
    Hull {
        /// Input file (count, then coordinate pairs); stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Area of the convex hull of one point set
    Area {
        /// Input file (count, then coordinate pairs); stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Intersect { input } => intersect(input, cmd.json),
        Action::Hull { input } => hull(input, cmd.json),
        Action::Area { input } => area(input, cmd.json),
    }
}

fn read_input(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(&p).with_context(|| format!("reading {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn intersect(path: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(path)?;
    let (first, second) = input::parse_two_point_sets(&text)?;
    tracing::info!(n1 = first.len(), n2 = second.len(), "parsed point sets");
    let a = ConvexPolygon::from_points(&first).context("first polygon")?;
    let b = ConvexPolygon::from_points(&second).context("second polygon")?;
    let res = a.intersection(&b);
    tracing::info!(vertices = res.len(), "clipped");
    if json {
        println!("{}", serde_json::to_string(&report::PolygonReport::new(&res))?);
    } else {
        print_vertices(&res);
        println!("{}", res.area());
    }
    Ok(())
}

fn hull(path: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(path)?;
    let points = input::parse_point_set(&text)?;
    tracing::info!(n = points.len(), "parsed point set");
    let poly = ConvexPolygon::from_points(&points)?;
    if json {
        println!("{}", serde_json::to_string(&report::PolygonReport::new(&poly))?);
    } else {
        print_vertices(&poly);
    }
    Ok(())
}

fn area(path: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(path)?;
    let points = input::parse_point_set(&text)?;
    let poly = ConvexPolygon::from_points(&points)?;
    if json {
        println!("{}", serde_json::to_string(&report::PolygonReport::new(&poly))?);
    } else {
        println!("{}", poly.area());
    }
    Ok(())
}

fn print_vertices(poly: &ConvexPolygon) {
    for v in poly.vertices() {
        println!("{}; {}", v.x, v.y);
    }
}
