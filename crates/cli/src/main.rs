use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use spanregion::cfg::DEFAULT_VIEW;
use spanregion::classify::{
    affine_dimension_2d, affine_dimension_3d, rank_linear_2d, rank_linear_3d,
};
use spanregion::{compute_region, Coords, Cube, Domain, GeomCfg, Mode, OrbitView, Rect, SpanVector};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod render;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Span regions of small vector sets, as JSON")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct VectorArgs {
    /// Vector as `x,y` or `x,y,z` (repeatable)
    #[arg(long = "vec", value_name = "X,Y[,Z]", allow_hyphen_values = true)]
    vecs: Vec<String>,
    /// CSV with header columns x, y and optionally z
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the region spanned by the vectors and print or write it as JSON
    Region {
        /// linear | affine | convex | cone | hyperplane
        #[arg(long)]
        mode: String,
        #[command(flatten)]
        vectors: VectorArgs,
        /// 2D domain as xmin,xmax,ymin,ymax
        #[arg(long, conflicts_with = "cube", allow_hyphen_values = true)]
        rect: Option<String>,
        /// 3D domain half-extent
        #[arg(long)]
        cube: Option<f64>,
        #[arg(long, default_value_t = DEFAULT_VIEW.0)]
        yaw: f64,
        #[arg(long, default_value_t = DEFAULT_VIEW.1)]
        pitch: f64,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print linear rank and affine dimension of the vectors
    Classify {
        #[command(flatten)]
        vectors: VectorArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Region {
            mode,
            vectors,
            rect,
            cube,
            yaw,
            pitch,
            out,
        } => {
            let vs = input::collect_vectors(&vectors.vecs, vectors.input.as_deref())?;
            let domain = pick_domain(rect.as_deref(), cube, &vs)?;
            region(&mode, &vs, domain, OrbitView::new(yaw, pitch), out, cmd.tag)
        }
        Action::Classify { vectors } => {
            let vs = input::collect_vectors(&vectors.vecs, vectors.input.as_deref())?;
            let c = classification(&vs)?;
            tracing::info!(dim = c.dim, rank = c.linear_rank, affine = c.affine_dimension, "classify");
            println!("{}", serde_json::to_string_pretty(&c)?);
            Ok(())
        }
        Action::Report => report(cmd.tag),
    }
}

/// Explicit `--cube`/`--rect` win; otherwise any 3D vector selects the
/// default cube and everything else the default rectangle.
fn pick_domain(rect: Option<&str>, cube: Option<f64>, vectors: &[SpanVector]) -> Result<Domain> {
    if let Some(half) = cube {
        return Ok(Domain::Space(Cube::new(half)?));
    }
    if let Some(s) = rect {
        return Ok(Domain::Plane(input::parse_rect(s)?));
    }
    if vectors.iter().any(|v| v.coords.dim() == 3) {
        Ok(Domain::Space(Cube::default()))
    } else {
        Ok(Domain::Plane(Rect::default()))
    }
}

fn region(
    mode: &str,
    vectors: &[SpanVector],
    domain: Domain,
    view: OrbitView,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let mode: Mode = mode.parse()?;
    tracing::info!(%mode, vectors = vectors.len(), dim = domain.dim(), tag = ?tag, "region");
    let result = compute_region(mode, vectors, &domain, &view, GeomCfg::default())?;
    let doc = render::region_json(mode, &result);

    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    };
    write_region(&out, &doc)?;
    let payload =
        provenance::Payload::for_region(mode, vectors.len(), &domain, &view, tag.as_deref(), &result);
    let sidecar = provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), kind = result.kind(), "wrote region");
    Ok(())
}

fn write_region(out: &Path, doc: &serde_json::Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct Classification {
    dim: usize,
    vectors: usize,
    linear_rank: usize,
    affine_dimension: usize,
}

fn classification(vectors: &[SpanVector]) -> Result<Classification> {
    let cfg = GeomCfg::default();
    let Some(first) = vectors.first() else {
        bail!("no vectors given (use --vec or --input)");
    };
    let dim = first.coords.dim();
    if let Some(v) = vectors.iter().find(|v| v.coords.dim() != dim) {
        bail!("vector {} is {}D but {} is {dim}D", v.id, v.coords.dim(), first.id);
    }
    let (linear_rank, affine_dimension) = match first.coords {
        Coords::Plane(_) => {
            let pts: Vec<_> = vectors
                .iter()
                .filter_map(|v| match v.coords {
                    Coords::Plane(p) => Some(p),
                    Coords::Space(_) => None,
                })
                .collect();
            (rank_linear_2d(&pts, cfg), affine_dimension_2d(&pts, cfg))
        }
        Coords::Space(_) => {
            let pts: Vec<_> = vectors
                .iter()
                .filter_map(|v| match v.coords {
                    Coords::Space(p) => Some(p),
                    Coords::Plane(_) => None,
                })
                .collect();
            (rank_linear_3d(&pts, cfg), affine_dimension_3d(&pts, cfg))
        }
    };
    Ok(Classification {
        dim,
        vectors: vectors.len(),
        linear_rank,
        affine_dimension,
    })
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "engine_version": spanregion::VERSION,
        "tag": tag,
        "modes": Mode::ALL.iter().map(|m| json!({ "name": m.name(), "rule": m.rule() })).collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
