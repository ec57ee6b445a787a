//! Command-line interface for quantizing points and expanding neighbourhoods

use crate::io::configuration::{DEFAULT_RESOLUTION, DEFAULT_SLICE, MAX_RESOLUTION, MAX_TIER};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::records::{Point, read_points};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geobox")]
#[command(
    author,
    version,
    about = "Quantize coordinates into geocells and list neighbouring cells"
)]
/// Command-line arguments for the geocell tool
pub struct Cli {
    /// Latitude in decimal degrees
    #[arg(
        value_name = "LAT",
        allow_negative_numbers = true,
        required_unless_present = "input",
        requires = "long"
    )]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(value_name = "LONG", allow_negative_numbers = true, requires = "lat")]
    pub long: Option<f64>,

    /// File with one LAT,LONG pair per line ('#' starts a comment)
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["lat", "long"])]
    pub input: Option<PathBuf>,

    /// Number of fractional digits in each geocell edge
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: u32,

    /// Cell edge length in units of 10^-resolution degrees
    #[arg(short, long, default_value_t = DEFAULT_SLICE)]
    pub slice: u32,

    /// Emit every cell within this many cells of the point instead of one cell
    #[arg(short, long)]
    pub tier: Option<u32>,

    /// Sort each neighbourhood lexicographically
    #[arg(long, requires = "tier")]
    pub sort: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check grid and expansion parameters before any work is done
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero slice, a resolution above
    /// [`MAX_RESOLUTION`] or a tier above [`MAX_TIER`]
    pub fn validate(&self) -> Result<()> {
        if self.slice == 0 {
            return Err(invalid_parameter(
                "slice",
                &self.slice,
                &"must be at least 1",
            ));
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(invalid_parameter(
                "resolution",
                &self.resolution,
                &format!("must be at most {MAX_RESOLUTION}"),
            ));
        }
        if let Some(tier) = self.tier {
            if tier > MAX_TIER {
                return Err(invalid_parameter(
                    "tier",
                    &tier,
                    &format!("must be at most {MAX_TIER}"),
                ));
            }
        }
        Ok(())
    }
}

/// Runs the quantize/expand pipeline described by the CLI arguments
pub struct GeocellProcessor {
    cli: Cli,
}

impl GeocellProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process the requested points, writing geocells to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if validation, input reading or writing fails
    pub fn process(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Process the requested points, writing one geocell per line to `out`
    ///
    /// In file mode with a tier, each point's neighbourhood is followed by a
    /// blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, input reading or writing fails
    pub fn process_to<W: Write>(&self, out: &mut W) -> Result<()> {
        self.cli.validate()?;
        let points = self.collect_points()?;

        let progress = match self.cli.input {
            Some(ref path) if self.cli.should_show_progress() => {
                ProgressManager::for_points(path, points.len())
            }
            _ => ProgressManager::hidden(),
        };
        let separate_sets = self.cli.input.is_some() && self.cli.tier.is_some();

        for point in &points {
            self.write_point(out, point)?;
            if separate_sets {
                write_line(out, "")?;
            }
            progress.advance();
        }
        progress.finish();

        out.flush()
            .map_err(|err| file_system_error("<output>", "flush", err))
    }

    fn collect_points(&self) -> Result<Vec<Point>> {
        if let Some(ref path) = self.cli.input {
            return read_points(path);
        }

        match (self.cli.lat, self.cli.long) {
            (Some(lat), Some(long)) => Ok(vec![Point::finite(lat, long)?]),
            _ => Err(invalid_parameter(
                "input",
                &"",
                &"a LAT LONG pair or an input file is required",
            )),
        }
    }

    fn write_point<W: Write>(&self, out: &mut W, point: &Point) -> Result<()> {
        let location = point.locate(self.cli.resolution, self.cli.slice);

        let Some(tier) = self.cli.tier else {
            return write_line(out, location.geocell());
        };

        let mut geocells = location.compute_set(tier);
        if self.cli.sort {
            geocells.sort_unstable();
        }
        for geocell in &geocells {
            write_line(out, geocell)?;
        }
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(|err| file_system_error("<output>", "write", err))
}
