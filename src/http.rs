use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use log::*;
use std::sync::Arc;
use url::Url;

use crate::poll::load_ps;
use crate::render::Canvas;

//------------------------------------------------------------------------------

type Req = Request<Incoming>;
type Rsp = Response<Full<Bytes>>;

/// Pages served by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Page {
    Index,
    Svg,
}

/// What the dashboard needs to render a page.
pub struct Dashboard {
    /// Base URL of the status service.
    pub source: Url,
    /// Canvas width for each render.
    pub width: u32,
    router: matchit::Router<Page>,
}

impl Dashboard {
    pub fn new(source: Url, width: u32) -> Self {
        let mut router = matchit::Router::new();
        // Routes are static and distinct, so insertion can't conflict.
        _ = router.insert("/", Page::Index);
        _ = router.insert("/ps.svg", Page::Svg);
        Self {
            source,
            width,
            router,
        }
    }

    /// Renders a fresh canvas from the status service.  If the fetch fails,
    /// the canvas is empty.
    async fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.width);
        if !load_ps(&self.source, &mut canvas).await {
            canvas.draw_ps(&[]);
        }
        canvas
    }

    pub async fn handle(&self, method: &Method, path: &str) -> (StatusCode, &'static str, String) {
        match (self.router.at(path).map(|m| *m.value), method) {
            (Ok(Page::Index), &Method::GET) => {
                let svg = self.render().await.to_svg();
                (StatusCode::OK, "text/html; charset=utf-8", make_index(&svg))
            }
            (Ok(Page::Svg), &Method::GET) => {
                let svg = self.render().await.to_svg();
                (StatusCode::OK, "image/svg+xml", svg)
            }
            (Ok(_), _) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "text/plain",
                method.to_string(),
            ),
            (Err(_), _) => (StatusCode::NOT_FOUND, "text/plain", path.to_string()),
        }
    }
}

fn make_index(svg: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head><meta charset=\"utf-8\"><title>ps</title></head>\n",
            "<body>\n",
            "<div id=\"ps\">\n",
            "{}",
            "</div>\n",
            "</body>\n",
            "</html>\n",
        ),
        svg
    )
}

fn make_response(status: StatusCode, content_type: &'static str, body: String) -> Rsp {
    let mut rsp = Response::new(Full::<Bytes>::from(body));
    *rsp.status_mut() = status;
    rsp.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        HeaderValue::from_static(content_type),
    );
    rsp
}

//------------------------------------------------------------------------------

/// Runs the dashboard HTTP service.
pub async fn run_http(dashboard: Dashboard, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let addr: std::net::SocketAddr = ([127, 0, 0, 1], port).into();
    let dashboard = Arc::new(dashboard);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    Ok(serve(listener, dashboard).await?)
}

/// Accepts connections on `listener` and serves dashboard pages on each.
pub async fn serve(
    listener: tokio::net::TcpListener,
    dashboard: Arc<Dashboard>,
) -> std::io::Result<()> {
    loop {
        let (stream, _) = listener.accept().await?;
        let dashboard = dashboard.clone();

        let service = hyper::service::service_fn(move |req: Req| {
            let dashboard = dashboard.clone();
            async move {
                let (status, content_type, body) =
                    dashboard.handle(req.method(), req.uri().path()).await;
                debug!("{} {} {}", req.method(), req.uri(), status);
                Ok::<_, hyper::Error>(make_response(status, content_type, body))
            }
        });

        tokio::task::spawn(async move {
            if let Err(err) = hyper::server::conn::http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                warn!("error serving connection: {:?}", err);
            }
        });
    }
}

//------------------------------------------------------------------------------
