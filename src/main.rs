//! Hover Position CLI
//!
//! Usage:
//!   hover-position --anchor TOP,LEFT,WIDTH,HEIGHT --box WIDTH,HEIGHT --container WIDTH,HEIGHT [OPTIONS]
//!
//! Options:
//!   --my <SPEC>            Point on the box, e.g. "top center"
//!   --at <SPEC>            Point on the anchor, e.g. "bottom center"
//!   -c, --collision <P>    ignore | flipfit | bestfit
//!   --prefer <AXIS>        horizontal | vertical
//!   --pointer <X,Y>        Use a pointer position instead of --anchor
//!   --preset <NAME>        Start from a named preset
//!   --profile <FILE>       Extra presets (TOML format)
//!   --candidates           Print all 81 evaluated candidates
//!   -v, --verbose          Log resolver decisions to stderr

use std::path::PathBuf;
use std::process;

use clap::Parser;

use hover_position::profile::ProfileError;
use hover_position::{
    generate_candidates, place, resolve_alignments, BestFitPreference, CollisionPolicy, Geometry,
    PlaceError, PlacementOptions, PlacementProfile, Rect,
};

#[derive(Parser)]
#[command(name = "hover-position")]
#[command(about = "Compute where a tooltip, popover or menu should be placed")]
struct Cli {
    /// Anchor rectangle as TOP,LEFT,WIDTH,HEIGHT
    #[arg(long, value_parser = parse_rect, required_unless_present = "pointer")]
    anchor: Option<Rect>,

    /// Pointer position X,Y used as a small square anchor
    #[arg(long, value_parser = parse_pair, conflicts_with = "anchor")]
    pointer: Option<(f64, f64)>,

    /// Box size as WIDTH,HEIGHT
    #[arg(long = "box", value_parser = parse_pair)]
    hover_box: (f64, f64),

    /// Container size as WIDTH,HEIGHT
    #[arg(long, value_parser = parse_pair)]
    container: (f64, f64),

    /// Point on the box, e.g. "top center"
    #[arg(long)]
    my: Option<String>,

    /// Point on the anchor, e.g. "bottom center"
    #[arg(long)]
    at: Option<String>,

    /// Collision policy: ignore, flipfit or bestfit
    #[arg(short, long)]
    collision: Option<CollisionPolicy>,

    /// Best-fit axis preference: horizontal or vertical
    #[arg(long)]
    prefer: Option<BestFitPreference>,

    /// Start from a named preset (tooltip, popover, dropdown, context-menu, ...)
    #[arg(long)]
    preset: Option<String>,

    /// Profile file with additional presets (TOML format)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Never accept a box hanging off the bottom of the container
    #[arg(long)]
    strict_overflow: bool,

    /// Print all evaluated candidates before the result
    #[arg(long)]
    candidates: bool,

    /// Log resolver decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let options = match build_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let anchor = match (cli.anchor, cli.pointer) {
        (Some(anchor), _) => anchor,
        (None, Some((x, y))) => Rect::pointer(x, y),
        // clap enforces one of the two
        (None, None) => {
            eprintln!("Error: either --anchor or --pointer is required");
            process::exit(2);
        }
    };
    let geometry = Geometry::new(
        anchor,
        Rect::sized(cli.hover_box.0, cli.hover_box.1),
        Rect::sized(cli.container.0, cli.container.1),
    );

    if cli.candidates {
        print_candidates(&geometry, &options);
    }

    match place(&geometry, &options) {
        Ok(placement) => {
            println!("top: {}", placement.top_px());
            println!("left: {}", placement.left_px());
        }
        Err(PlaceError::Alignment { role, source }) => {
            eprint!("{}", source.format(&format!("--{}", role)));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn build_options(cli: &Cli) -> Result<PlacementOptions, ProfileError> {
    // A given profile is always loaded so a bad file is reported even without --preset
    let mut profile = PlacementProfile::default();
    if let Some(path) = &cli.profile {
        profile = profile.merged_with(PlacementProfile::from_file(path)?);
    }
    let mut options = match &cli.preset {
        Some(name) => profile.options(name)?,
        None => PlacementOptions::default(),
    };

    if let Some(my) = &cli.my {
        options = options.with_my(my.as_str());
    }
    if let Some(at) = &cli.at {
        options = options.with_at(at.as_str());
    }
    if let Some(collision) = cli.collision {
        options = options.with_collision(collision);
    }
    if let Some(prefer) = cli.prefer {
        options = options.with_preference(prefer);
    }
    if cli.strict_overflow {
        options = options.with_tolerate_top_overflow(false);
    }
    Ok(options)
}

fn print_candidates(geometry: &Geometry, options: &PlacementOptions) {
    // Requested pair is marked; unparseable specs are reported by place()
    let requested = resolve_alignments(options).ok();
    let mark = |collides: bool| if collides { "!" } else { " " };

    println!("{:<15} {:<15} {:>10}   {:>10}", "my", "at", "top", "left");
    for c in &generate_candidates(geometry) {
        let is_requested = requested == Some((c.my, c.at));
        println!(
            "{:<15} {:<15} {:>10} {} {:>10} {}{}",
            c.my,
            c.at,
            c.top.value,
            mark(c.top.will_collide),
            c.left.value,
            mark(c.left.will_collide),
            if is_requested { "  <- requested" } else { "" }
        );
    }
    println!();
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated numbers, got '{}'", N, s));
    }
    let mut values = [0.0; N];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
    }
    Ok(values)
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [top, left, width, height] = parse_numbers::<4>(s)?;
    Ok(Rect::new(top, left, width, height))
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let [a, b] = parse_numbers::<2>(s)?;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec![
            "hover-position",
            "--anchor",
            "100,100,80,20",
            "--box",
            "120,40",
            "--container",
            "800,600",
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_missing_profile_reported_without_preset() {
        let cli = cli(&["--profile", "/nonexistent/hover-position/profile.toml"]);
        assert!(matches!(build_options(&cli), Err(ProfileError::IoError(_))));
    }

    #[test]
    fn test_flags_override_preset() {
        let cli = cli(&["--preset", "popover", "--my", "bottom left", "--strict-overflow"]);
        let options = build_options(&cli).unwrap();
        assert_eq!(options.my, "bottom left");
        assert_eq!(options.at, "bottom left");
        assert_eq!(options.collision, CollisionPolicy::FlipFit);
        assert!(!options.tolerate_top_overflow);
    }

    #[test]
    fn test_unknown_preset() {
        let cli = cli(&["--preset", "balloon"]);
        assert!(matches!(
            build_options(&cli),
            Err(ProfileError::UnknownPreset { .. })
        ));
    }
}
