use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

//------------------------------------------------------------------------------

/// Execution state of a monitored process.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Running,
    Syscall,
    Gcstop,
    Dead,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Idle,
        Status::Running,
        Status::Syscall,
        Status::Gcstop,
        Status::Dead,
    ];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Syscall => "syscall",
            Status::Gcstop => "gcstop",
            Status::Dead => "dead",
        }
    }

    /// Display color for this status.
    pub fn color(&self) -> &'static str {
        STATUS_COLORS[self]
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status: {}", s))
    }
}

lazy_static! {
    static ref STATUS_COLORS: HashMap::<Status, &'static str> = {
        HashMap::from([
            (Status::Idle   , "white"),
            (Status::Running, "green"),
            (Status::Syscall, "blue"),
            (Status::Gcstop , "yellow"),
            (Status::Dead   , "red"),
        ])
    };
}

//------------------------------------------------------------------------------

/// One entry from the status endpoint.
///
/// The status is kept as the text the endpoint sent, so that records with a
/// status we don't know still render and label correctly.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProcessRecord {
    pub name: String,
    pub status: String,
}

impl ProcessRecord {
    pub fn new(name: &str, status: &str) -> Self {
        Self {
            name: name.to_string(),
            status: status.to_string(),
        }
    }

    pub fn status(&self) -> Option<Status> {
        self.status.parse().ok()
    }

    /// Box fill color, or none if the status is unknown.
    pub fn fill(&self) -> Option<&'static str> {
        self.status().map(|s| s.color())
    }

    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.status)
    }
}

//------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_color() {
        for status in Status::ALL {
            assert!(!status.color().is_empty());
        }
        assert_eq!(Status::Running.color(), "green");
        assert_eq!(Status::Dead.color(), "red");
    }

    #[test]
    fn parse_and_display() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>(), Ok(status));
        }
        assert!("Running".parse::<Status>().is_err());
        assert!("waiting".parse::<Status>().is_err());
    }

    #[test]
    fn label() {
        let rec = ProcessRecord::new("worker1", "idle");
        assert_eq!(rec.label(), "worker1(idle)");
        assert_eq!(rec.fill(), Some("white"));
    }

    #[test]
    fn unknown_status() {
        let rec = ProcessRecord::new("p3", "scanrunning");
        assert_eq!(rec.status(), None);
        assert_eq!(rec.fill(), None);
        assert_eq!(rec.label(), "p3(scanrunning)");
    }

    #[test]
    fn from_json() {
        let recs: Vec<ProcessRecord> = serde_json::from_str(
            r#" [{"name": "p0", "status": "syscall"}, {"name": "p1", "status": "gcstop"}] "#,
        )
        .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].status(), Some(Status::Syscall));
        assert_eq!(recs[1].fill(), Some("yellow"));
    }

    #[test]
    fn status_serde() {
        assert_eq!(serde_json::to_string(&Status::Gcstop).unwrap(), r#""gcstop""#);
        assert_eq!(
            serde_json::from_str::<Status>(r#""dead""#).unwrap(),
            Status::Dead
        );
    }
}
