//! Probe report validation

use std::path::Path;

use tracing::debug;

use crate::domain::model::MediaProbe;
use crate::domain::rules::{seconds_to_duration, RotationRule, StreamSelector};
use crate::error::{ReelError, ReelResult};
use crate::probe::{NumberField, ProbeReport};

/// Turns a decoded ffprobe report into media properties
pub struct ReportValidator;

impl ReportValidator {
    /// Decode raw ffprobe JSON output
    pub fn parse(path: &Path, json: &[u8]) -> ReelResult<MediaProbe> {
        let report: ProbeReport = serde_json::from_slice(json).map_err(|e| {
            Self::malformed(
                path,
                format!("unable to parse JSON output from ffprobe: {}", e),
            )
        })?;
        Self::validate(path, &report)
    }

    /// Validate a report and extract duration, dimensions and bitrate
    pub fn validate(path: &Path, report: &ProbeReport) -> ReelResult<MediaProbe> {
        if report.streams.is_empty() {
            return Err(Self::malformed(
                path,
                "report does not contain stream data, make sure the file contains a valid video"
                    .to_string(),
            ));
        }

        let seconds = match &report.format.duration {
            Some(field) => field
                .as_f64()
                .ok_or_else(|| Self::invalid_field(path, "duration", field))?,
            None => return Err(Self::malformed(path, "missing duration".to_string())),
        };

        // Some containers do not report a bitrate at all
        let bitrate = match &report.format.bit_rate {
            Some(field) => field
                .as_u64()
                .ok_or_else(|| Self::invalid_field(path, "bitrate", field))?,
            None => 0,
        };

        let index = StreamSelector::select(report.streams.iter().map(|s| (s.width, s.height)));
        let stream = &report.streams[index];

        let rotation = stream
            .rotation_field()
            .map(|field| {
                field
                    .as_i64()
                    .ok_or_else(|| Self::invalid_field(path, "rotation", field))
            })
            .transpose()?;

        let (width, height) = RotationRule::orient(stream.width, stream.height, rotation);
        debug!(
            path = %path.display(),
            stream = index,
            width,
            height,
            ?rotation,
            "selected visual stream"
        );

        Ok(MediaProbe {
            duration: seconds_to_duration(seconds),
            width,
            height,
            bitrate,
            rotation,
        })
    }

    fn malformed(path: &Path, message: String) -> ReelError {
        ReelError::MalformedProbeOutput {
            path: path.to_path_buf(),
            message,
        }
    }

    fn invalid_field(path: &Path, name: &str, field: &NumberField) -> ReelError {
        Self::malformed(path, format!("invalid {}: {}", name, field.raw()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn parse(json: &str) -> ReelResult<MediaProbe> {
        ReportValidator::parse(Path::new("clip.mp4"), json.as_bytes())
    }

    #[test]
    fn test_parse_typical_report() {
        let probe = parse(
            r#"{
                "streams": [
                    {"codec_type": "video", "width": 1280, "height": 720},
                    {"codec_type": "audio"}
                ],
                "format": {"duration": "52.209000", "bit_rate": "1205959"}
            }"#,
        )
        .unwrap();

        assert_eq!(probe.width, 1280);
        assert_eq!(probe.height, 720);
        assert_eq!(probe.bitrate, 1_205_959);
        assert_eq!(probe.duration, Duration::from_millis(52_209));
        assert_eq!(probe.rotation, None);
    }

    #[test]
    fn test_rotated_portrait_capture_is_swapped() {
        let probe = parse(
            r#"{
                "streams": [{"width": 1080, "height": 1920, "tags": {"rotate": "90"}}],
                "format": {"duration": "12.5", "bit_rate": "9000000"}
            }"#,
        )
        .unwrap();

        assert_eq!((probe.width, probe.height), (1920, 1080));
        assert_eq!(probe.rotation, Some(90));
    }

    #[test]
    fn test_zero_streams_is_malformed() {
        let result = parse(r#"{"streams": [], "format": {"duration": "1", "bit_rate": "1"}}"#);
        assert!(matches!(result, Err(ReelError::MalformedProbeOutput { .. })));

        let result = parse(r#"{"format": {"duration": "1", "bit_rate": "1"}}"#);
        assert!(matches!(result, Err(ReelError::MalformedProbeOutput { .. })));
    }

    #[test]
    fn test_no_visual_stream_falls_back_to_first() {
        let probe = parse(
            r#"{
                "streams": [{"codec_type": "audio"}, {"codec_type": "data"}],
                "format": {"duration": "3.0", "bit_rate": "128000"}
            }"#,
        )
        .unwrap();

        assert_eq!((probe.width, probe.height), (0, 0));
    }

    #[test]
    fn test_invalid_numbers_are_malformed() {
        let bad_duration = parse(
            r#"{"streams": [{"width": 1, "height": 1}], "format": {"duration": "N/A", "bit_rate": "1"}}"#,
        );
        assert!(matches!(bad_duration, Err(ReelError::MalformedProbeOutput { .. })));

        let bad_bitrate = parse(
            r#"{"streams": [{"width": 1, "height": 1}], "format": {"duration": "1", "bit_rate": "fast"}}"#,
        );
        assert!(matches!(bad_bitrate, Err(ReelError::MalformedProbeOutput { .. })));

        let bad_rotation = parse(
            r#"{"streams": [{"width": 1, "height": 1, "tags": {"rotate": "sideways"}}],
                "format": {"duration": "1", "bit_rate": "1"}}"#,
        );
        assert!(matches!(bad_rotation, Err(ReelError::MalformedProbeOutput { .. })));

        let missing_duration =
            parse(r#"{"streams": [{"width": 1, "height": 1}], "format": {"bit_rate": "1"}}"#);
        assert!(matches!(missing_duration, Err(ReelError::MalformedProbeOutput { .. })));
    }

    #[test]
    fn test_missing_bitrate_is_unset() {
        let probe =
            parse(r#"{"streams": [{"width": 2, "height": 2}], "format": {"duration": "1"}}"#)
                .unwrap();
        assert_eq!(probe.bitrate, 0);
    }

    #[test]
    fn test_not_json_is_malformed() {
        let result = parse("ffprobe version 6.0");
        assert!(matches!(result, Err(ReelError::MalformedProbeOutput { .. })));
    }
}
