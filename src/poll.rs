use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCEPT, HOST};
use hyper::{Method, Request};
use hyper_util::rt::TokioIo;
use log::*;
use std::path::Path;
use tokio::net::TcpStream;
use url::{Host, Position, Url};

use crate::err::{Error, Result};
use crate::render::Canvas;
use crate::status::ProcessRecord;

//------------------------------------------------------------------------------

/// Path of the status endpoint, relative to the service's base URL.
pub const PS_PATH: &str = "/runtime/ps";

pub fn get_ps_url(base: &Url) -> Result<Url> {
    let url = base.join(PS_PATH)?;
    if url.scheme() != "http" || url.host_str().is_none() {
        return Err(Error::UnsupportedUrl(base.to_string()));
    }
    Ok(url)
}

/// Issues one GET to the status endpoint and parses the process records.
pub async fn fetch_ps(base: &Url) -> Result<Vec<ProcessRecord>> {
    let url = get_ps_url(base)?;
    let port = url.port_or_known_default().unwrap_or(80);

    debug!("connecting to {}", &url[Position::BeforeHost..Position::AfterPort]);
    let stream = match url.host() {
        Some(Host::Domain(domain)) => TcpStream::connect((domain, port)).await?,
        Some(Host::Ipv4(addr)) => TcpStream::connect((addr, port)).await?,
        Some(Host::Ipv6(addr)) => TcpStream::connect((addr, port)).await?,
        None => return Err(Error::UnsupportedUrl(url.to_string())),
    };
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream)).await?;
    tokio::spawn(async move {
        if let Err(err) = conn.await {
            warn!("connection error: {}", err);
        }
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri(&url[Position::BeforePath..Position::AfterQuery])
        .header(HOST, &url[Position::BeforeHost..Position::AfterPort])
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .body(Empty::<Bytes>::new())?;
    trace!("GET {}", url);
    let rsp = sender.send_request(req).await?;

    let status = rsp.status();
    if !status.is_success() {
        return Err(Error::Status(status));
    }
    let body = rsp.into_body().collect().await?.to_bytes();
    let records: Vec<ProcessRecord> = serde_json::from_slice(&body)?;
    debug!("fetched {} process records", records.len());
    Ok(records)
}

/// Fetches process records and draws them on `canvas`.
///
/// Returns true if the records were drawn.  A failed fetch is logged and the
/// canvas is left untouched.
pub async fn load_ps(base: &Url, canvas: &mut Canvas) -> bool {
    match fetch_ps(base).await {
        Ok(records) => {
            canvas.draw_ps(&records);
            true
        }
        Err(err) => {
            error!("failed to load {}: {}", PS_PATH, err);
            false
        }
    }
}

/// Loads process records from a JSON file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessRecord>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

//------------------------------------------------------------------------------
