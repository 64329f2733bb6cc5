use crate::{Listing, ListingError, MediaItem};
use std::sync::Arc;
use warp::{
    http::{header, HeaderValue, Response, StatusCode},
    Filter,
};

static CACHE_CONTROL: &str = "s-maxage=600, stale-while-revalidate";

/// Serves the listing at `route` (slash separated), for any method
pub fn routes(
    listing: Listing,
    route: &str,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    fn with_listing(
        listing: Arc<Listing>,
    ) -> impl Filter<Extract = (Arc<Listing>,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || listing.clone())
    }

    let expected = route.trim_matches('/').to_string();
    warp::path::full()
        .and_then(move |path: warp::path::FullPath| {
            let ok = path.as_str().trim_matches('/') == expected;
            async move {
                if ok {
                    Ok(())
                } else {
                    Err(warp::reject::not_found())
                }
            }
        })
        .untuple_one()
        .and(with_listing(Arc::new(listing)))
        .and_then(list_media)
}

async fn list_media(
    listing: Arc<Listing>,
) -> std::result::Result<impl warp::Reply, warp::Rejection> {
    Ok(match listing.handle().await {
        Ok(items) => success(&items),
        Err(err) => failure(&err),
    })
}

fn success(items: &[MediaItem]) -> Response<Vec<u8>> {
    match serde_json::to_vec(items) {
        Ok(body) => {
            let mut resp = json_response(StatusCode::OK, body);
            resp.headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
            resp
        }
        Err(err) => failure(&ListingError::Transport(format!(
            "cannot encode the listing: {}",
            err
        ))),
    }
}

fn failure(err: &ListingError) -> Response<Vec<u8>> {
    log::error!("cannot list media files: {}", err);
    // ErrorBody is two strings, it always encodes
    let body = serde_json::to_vec(&err.to_body()).unwrap_or_default();
    json_response(StatusCode::INTERNAL_SERVER_ERROR, body)
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response<Vec<u8>> {
    use headers::HeaderMapExt as _;

    let mut resp = Response::new(body);
    *resp.status_mut() = status;
    resp.headers_mut().typed_insert(headers::ContentType::json());
    resp
}
