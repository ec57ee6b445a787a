//! Tests for argument validation and the geocell processing pipeline

#[cfg(test)]
mod tests {
    use clap::Parser;
    use geobox::GeoboxError;
    use geobox::io::cli::{Cli, GeocellProcessor};
    use geobox::io::configuration::{MAX_RESOLUTION, MAX_TIER};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run(args: &[&str]) -> Result<String, String> {
        let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
        let mut out = Vec::new();
        GeocellProcessor::new(cli)
            .process_to(&mut out)
            .map_err(|e| e.to_string())?;
        String::from_utf8(out).map_err(|e| e.to_string())
    }

    fn point_file(content: &str) -> Option<NamedTempFile> {
        let mut file = NamedTempFile::new().ok()?;
        file.write_all(content.as_bytes()).ok()?;
        Some(file)
    }

    // Tests a single point prints its geocell
    // Verified by printing the debug representation of the location
    #[test]
    fn test_single_point() {
        let output = run(&["geobox", "-r", "1", "-s", "5", "38.96367", "-76.501164"]);
        assert_eq!(output, Ok("39.0|-77.0|38.5|-76.5\n".to_string()));
    }

    // Tests a negative latitude is accepted as a positional value
    // Verified by disabling negative number parsing on LAT
    #[test]
    fn test_negative_latitude() {
        let cli = Cli::try_parse_from(["geobox", "-33.8688", "151.2093"]);
        assert!(cli.is_ok_and(|c| c.lat == Some(-33.8688) && c.long == Some(151.2093)));
    }

    // Tests a tier prints the whole neighbourhood, optionally sorted
    // Verified by ignoring the sort flag
    #[test]
    fn test_tier_output() {
        let output = run(&[
            "geobox", "-r", "1", "-s", "5", "-t", "1", "--sort", "37.78452", "-122.39532",
        ]);
        let expected = [
            "37.5|-122.0|37.0|-121.5",
            "37.5|-122.5|37.0|-122.0",
            "37.5|-123.0|37.0|-122.5",
            "38.0|-122.0|37.5|-121.5",
            "38.0|-122.5|37.5|-122.0",
            "38.0|-123.0|37.5|-122.5",
            "38.5|-122.0|38.0|-121.5",
            "38.5|-122.5|38.0|-122.0",
            "38.5|-123.0|38.0|-122.5",
        ];
        let expected = expected.iter().map(|g| format!("{g}\n")).collect::<String>();
        assert_eq!(output, Ok(expected));
    }

    // Tests file input prints one geocell per point in order
    // Verified by sorting the input points
    #[test]
    fn test_file_input() {
        let Some(file) = point_file("# sample\n38.96367,-76.501164\n37.78452,-122.39532\n")
        else {
            return;
        };
        let Some(path) = file.path().to_str() else {
            return;
        };

        let output = run(&["geobox", "-q", "-r", "1", "-s", "5", "-i", path]);
        assert_eq!(
            output,
            Ok("39.0|-77.0|38.5|-76.5\n38.0|-122.5|37.5|-122.0\n".to_string())
        );
    }

    // Tests file input with a tier separates each neighbourhood
    // Verified by omitting the blank separator line
    #[test]
    fn test_file_input_with_tier() {
        let Some(file) = point_file("1.0,1.0\n2.5,2.5\n") else {
            return;
        };
        let Some(path) = file.path().to_str() else {
            return;
        };

        let output = run(&["geobox", "-q", "-r", "0", "-s", "1", "-t", "0", "-i", path]);
        assert_eq!(output, Ok("2|1|1|2\n\n3|2|2|3\n\n".to_string()));
    }

    // Tests a bad record in a file reports its line
    // Verified by dropping line context from file parsing
    #[test]
    fn test_file_input_bad_line() {
        let Some(file) = point_file("1.0,1.0\n1.0;1.0\n") else {
            return;
        };
        let Some(path) = file.path().to_str() else {
            return;
        };

        let output = run(&["geobox", "-q", "-i", path]);
        assert!(output.is_err_and(|e| e.contains("line 2")));
    }

    // Tests a point and an input file cannot be combined
    // Verified by removing the conflict declaration
    #[test]
    fn test_point_conflicts_with_input() {
        let cli = Cli::try_parse_from(["geobox", "-i", "points.csv", "1.0", "2.0"]);
        assert!(cli.is_err());
    }

    // Tests a latitude without a longitude is rejected
    // Verified by removing the requires declaration
    #[test]
    fn test_latitude_requires_longitude() {
        assert!(Cli::try_parse_from(["geobox", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["geobox"]).is_err());
    }

    // Tests sort is only meaningful with a tier
    // Verified by removing the requires declaration
    #[test]
    fn test_sort_requires_tier() {
        assert!(Cli::try_parse_from(["geobox", "--sort", "1.0", "2.0"]).is_err());
    }

    // Tests parameter limits are enforced before processing
    // Verified by skipping validation in process_to
    #[test]
    fn test_validation() {
        let zero_slice = Cli::try_parse_from(["geobox", "-s", "0", "1.0", "2.0"]);
        assert!(zero_slice.is_ok_and(|c| matches!(
            c.validate(),
            Err(GeoboxError::InvalidParameter {
                parameter: "slice",
                ..
            })
        )));

        let resolution = (MAX_RESOLUTION + 1).to_string();
        let too_fine = Cli::try_parse_from(["geobox", "-r", resolution.as_str(), "1.0", "2.0"]);
        assert!(too_fine.is_ok_and(|c| c.validate().is_err()));

        let tier = (MAX_TIER + 1).to_string();
        let too_wide = Cli::try_parse_from(["geobox", "-t", tier.as_str(), "1.0", "2.0"]);
        assert!(too_wide.is_ok_and(|c| c.validate().is_err()));

        let output = run(&["geobox", "-s", "0", "1.0", "2.0"]);
        assert!(output.is_err_and(|e| e.contains("slice")));
    }

    // Tests non-finite coordinates are rejected
    // Verified by removing the finite check for single points
    #[test]
    fn test_non_finite_point() {
        let output = run(&["geobox", "NaN", "2.0"]);
        assert!(output.is_err_and(|e| e.contains("finite")));
    }

    // Tests quiet flag controls progress display
    // Verified by inverting the quiet check
    #[test]
    fn test_progress_flag() {
        let quiet = Cli::try_parse_from(["geobox", "-q", "1.0", "2.0"]);
        assert!(quiet.is_ok_and(|c| !c.should_show_progress()));

        let loud = Cli::try_parse_from(["geobox", "1.0", "2.0"]);
        assert!(loud.is_ok_and(|c| c.should_show_progress()));
    }
}
