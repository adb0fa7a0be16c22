use reqwest::header::LOCATION;
use reqwest::Client;
use url::Url;

/// Prepend `http://` when the input carries no scheme, so bare hostnames
/// can be traced.
pub fn ensure_scheme(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

/// Follow HTTP redirects by hand, up to `max_hops` entries. The client
/// must be built with auto-redirects disabled so every hop is observed.
/// Each visited URL is appended before the request for it is issued; a
/// non-3xx response, a missing or unresolvable `Location`, or any
/// transport error ends the walk, and the chain accumulated so far is the
/// result. Partial chains are valid results, not failures.
pub async fn trace_redirects(client: &Client, start: &str, max_hops: usize) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = start.to_string();

    for _ in 0..max_hops {
        chain.push(current.clone());

        let resp = match client.head(&current).send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::debug!("redirect trace stopped at {current}: {err}");
                break;
            }
        };
        if !resp.status().is_redirection() {
            break;
        }
        let Some(location) = resp
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
        else {
            break;
        };
        match resolve_location(&current, location) {
            Some(next) => current = next,
            None => break,
        }
    }

    chain
}

// Location may be relative; resolve it against the URL that issued it.
fn resolve_location(base: &str, location: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    base.join(location).ok().map(Into::into)
}
