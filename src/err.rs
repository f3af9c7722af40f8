use hyper::StatusCode;

//------------------------------------------------------------------------------

/// All the potentially user-visible things that can go wrong while fetching
/// or loading process records.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Http(hyper::Error),
    Request(hyper::http::Error),
    Status(StatusCode),
    Json(serde_json::Error),
    Url(url::ParseError),
    UnsupportedUrl(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Io(ref err) => err.fmt(f),
            Error::Http(ref err) => err.fmt(f),
            Error::Request(ref err) => err.fmt(f),
            Error::Status(status) => write!(f, "unexpected HTTP status: {}", status),
            Error::Json(ref err) => write!(f, "invalid JSON: {}", err),
            Error::Url(ref err) => err.fmt(f),
            Error::UnsupportedUrl(ref url) => write!(f, "unsupported URL: {}", url),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<hyper::Error> for Error {
    fn from(err: hyper::Error) -> Error {
        Error::Http(err)
    }
}

impl From<hyper::http::Error> for Error {
    fn from(err: hyper::http::Error) -> Error {
        Error::Request(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::Url(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
