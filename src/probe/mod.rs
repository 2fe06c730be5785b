//! Media file inspection module
//!
//! Runs ffprobe and turns its JSON report into a [`MediaProbe`](crate::domain::model::MediaProbe).

use serde::Deserialize;

pub mod inspector;
pub mod validator;

pub use inspector::FfprobeInspector;
pub use validator::ReportValidator;

/// Top-level ffprobe report (`-show_format -show_streams`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeReport {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
    #[serde(default)]
    pub format: ProbeFormat,
}

/// One entry of the `streams` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    /// Zero for audio, data and subtitle streams
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub tags: StreamTags,
    #[serde(default)]
    pub side_data_list: Vec<SideData>,
}

/// Stream tags; only rotation matters here
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamTags {
    pub rotate: Option<NumberField>,
}

/// Side data attached to a stream, e.g. a display matrix
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SideData {
    pub side_data_type: Option<String>,
    pub rotation: Option<NumberField>,
}

/// Container-level information
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    /// Seconds, usually encoded as a string
    pub duration: Option<NumberField>,
    /// Bits per second, usually encoded as a string
    pub bit_rate: Option<NumberField>,
}

/// A numeric value that ffprobe may emit either as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Number(serde_json::Number),
    Text(String),
}

impl NumberField {
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberField::Number(n) => n.as_f64()?,
            NumberField::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberField::Number(n) => n.as_i64(),
            NumberField::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            NumberField::Number(n) => n.as_u64(),
            NumberField::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Raw text, for error messages
    pub fn raw(&self) -> String {
        match self {
            NumberField::Number(n) => n.to_string(),
            NumberField::Text(s) => s.clone(),
        }
    }
}

impl ProbeStream {
    /// Rotation in degrees: the `rotate` tag, else a side-data rotation
    pub fn rotation_field(&self) -> Option<&NumberField> {
        self.tags.rotate.as_ref().or_else(|| {
            self.side_data_list
                .iter()
                .find_map(|side_data| side_data.rotation.as_ref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_field_accepts_strings_and_numbers() {
        let text: NumberField = serde_json::from_str(r#""52.209000""#).unwrap();
        assert_eq!(text.as_f64(), Some(52.209));

        let number: NumberField = serde_json::from_str("52.5").unwrap();
        assert_eq!(number.as_f64(), Some(52.5));

        let bitrate: NumberField = serde_json::from_str(r#""1205959""#).unwrap();
        assert_eq!(bitrate.as_u64(), Some(1_205_959));

        let rotate: NumberField = serde_json::from_str(r#""-90""#).unwrap();
        assert_eq!(rotate.as_i64(), Some(-90));
    }

    #[test]
    fn test_number_field_rejects_garbage() {
        let text: NumberField = serde_json::from_str(r#""N/A""#).unwrap();
        assert_eq!(text.as_f64(), None);
        assert_eq!(text.as_u64(), None);
        assert_eq!(text.raw(), "N/A");

        let inf: NumberField = serde_json::from_str(r#""inf""#).unwrap();
        assert_eq!(inf.as_f64(), None);
    }

    #[test]
    fn test_report_ignores_unknown_fields() {
        let report: ProbeReport = serde_json::from_str(
            r#"{
                "streams": [
                    {"index": 0, "codec_type": "audio", "sample_rate": "48000"},
                    {"index": 1, "codec_type": "video", "width": 1920, "height": 1080,
                     "tags": {"language": "und", "rotate": "90"}}
                ],
                "format": {"filename": "a.mp4", "duration": "60.000000", "bit_rate": "800000"}
            }"#,
        )
        .unwrap();

        assert_eq!(report.streams.len(), 2);
        assert_eq!(report.streams[0].width, 0);
        assert_eq!(report.streams[1].rotation_field().and_then(NumberField::as_i64), Some(90));
    }

    #[test]
    fn test_side_data_rotation_used_without_tag() {
        let stream: ProbeStream = serde_json::from_str(
            r#"{"width": 1080, "height": 1920,
                "side_data_list": [{"side_data_type": "Display Matrix", "rotation": -90}]}"#,
        )
        .unwrap();
        assert_eq!(stream.rotation_field().and_then(NumberField::as_i64), Some(-90));
    }
}
