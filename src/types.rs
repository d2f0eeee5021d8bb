use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coordinates sent to the passport (travel) endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Reason attached to a user report.
///
/// Equality compares the wire code, so `Code(1) == Spam`.
#[derive(Clone, Copy, Debug)]
pub enum ReportCause {
    Other,
    Spam,
    InappropriatePhotos,
    /// Any cause code; prefer the named variants where one exists.
    Code(u8),
}

impl ReportCause {
    pub fn code(self) -> u8 {
        match self {
            Self::Other => 0,
            Self::Spam => 1,
            Self::InappropriatePhotos => 4,
            Self::Code(code) => code,
        }
    }
}

impl PartialEq for ReportCause {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for ReportCause {}

impl From<u8> for ReportCause {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Other,
            1 => Self::Spam,
            4 => Self::InappropriatePhotos,
            other => Self::Code(other),
        }
    }
}

/// One rendition of a photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessedFile {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Profile photo with its resized renditions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    #[serde(rename = "processedFiles", default)]
    pub processed_files: Vec<ProcessedFile>,
}

impl Photo {
    /// URL of the rendition with exactly `width` x `height`, if present.
    pub fn sized(&self, width: u32, height: u32) -> Option<&str> {
        self.processed_files
            .iter()
            .find(|file| file.width == width && file.height == height)
            .map(|file| file.url.as_str())
    }

    /// Renditions keyed as `"{width}x{height}"`, in server order.
    pub fn sizes(&self) -> Vec<(String, &str)> {
        self.processed_files
            .iter()
            .map(|file| (format!("{}x{}", file.width, file.height), file.url.as_str()))
            .collect()
    }
}

/// Another user's profile as returned by recommendations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub distance_mi: Option<f64>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// The authenticated account's own profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub distance_filter: Option<u32>,
    #[serde(default)]
    pub gender: Option<i32>,
    #[serde(default)]
    pub gender_filter: Option<i32>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use serde_json::json;

    use super::{ClientUser, ReportCause, User};

    #[test]
    fn report_cause_compares_by_code() {
        assert_eq!(ReportCause::Code(1), ReportCause::Spam);
        assert_eq!(ReportCause::from(1), ReportCause::Code(1));
        assert_ne!(ReportCause::Code(2), ReportCause::Spam);
    }

    #[test]
    fn user_decodes_photos_and_renditions() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "name": "A",
            "bio": "hi",
            "distance_mi": 3,
            "photos": [{
                "id": "p1",
                "url": "https://images.example/p1.jpg",
                "processedFiles": [
                    {"url": "https://images.example/p1_640.jpg", "width": 640, "height": 800},
                    {"url": "https://images.example/p1_84.jpg", "width": 84, "height": 106}
                ]
            }],
            "unknown_field": true
        }))
        .expect("user must decode");

        assert_eq!(user.id, "u1");
        assert_eq!(user.distance_mi, Some(3.0));
        let photo = &user.photos[0];
        assert_eq!(photo.sized(84, 106), Some("https://images.example/p1_84.jpg"));
        assert_eq!(photo.sized(1, 1), None);
        assert_eq!(photo.sizes()[0].0, "640x800");
    }

    #[test]
    fn user_tolerates_missing_optional_fields() {
        let user: User =
            serde_json::from_value(json!({"_id": "u2", "name": "B"})).expect("user must decode");
        assert!(user.bio.is_empty());
        assert!(user.photos.is_empty());
        assert_eq!(user.distance_mi, None);
    }

    #[test]
    fn client_user_parses_timestamps() {
        let me: ClientUser = serde_json::from_value(json!({
            "_id": "me",
            "name": "C",
            "bio": "",
            "birth_date": "1995-04-12T00:00:00.000Z",
            "create_date": "2017-07-09T10:28:13.392Z",
            "distance_filter": 50,
            "gender": 0,
            "gender_filter": 1
        }))
        .expect("profile must decode");

        assert_eq!(me.birth_date.expect("birth date").year(), 1995);
        assert_eq!(me.distance_filter, Some(50));
        assert_eq!(me.gender_filter, Some(1));
    }
}
