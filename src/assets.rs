use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Start fetching `src`; the promise settles on the element's load/error.
fn begin_load(src: &str) -> anyhow::Result<(web::HtmlImageElement, js_sys::Promise)> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    Ok((img, promise))
}

/// Load every path concurrently and wait for all of them to settle.
///
/// Failed images are logged and left out; the returned order follows `paths`
/// minus the failures, and each bitmap's position is its asset index.
pub async fn load_all(paths: &[String]) -> Vec<web::HtmlImageElement> {
    let mut pending = Vec::with_capacity(paths.len());
    for path in paths {
        match begin_load(path) {
            Ok(p) => pending.push((path, p)),
            Err(e) => log::warn!("[assets] could not start {}: {:?}", path, e),
        }
    }

    let mut loaded = Vec::with_capacity(pending.len());
    for (path, (img, promise)) in pending {
        match JsFuture::from(promise).await {
            Ok(_) => {
                img.set_onload(None);
                img.set_onerror(None);
                loaded.push(img);
            }
            Err(e) => log::warn!("[assets] {} failed to load: {:?}", path, e),
        }
    }
    log::info!("[assets] loaded {}/{} images", loaded.len(), paths.len());
    loaded
}
