use crate::domain::GeoPoint;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, stdin};
use tokio::sync::watch::Sender;
use tracing::{debug, instrument, warn};

/// Feeds observer locations typed on stdin as `<latitude>,<longitude>` into `tx`.
pub async fn watch_stdin(tx: Sender<GeoPoint>) {
    watch_lines(BufReader::new(stdin()), tx).await;
}

/// Sends every valid location line of `reader` to `tx`, returns at end of input or when
/// nobody listens anymore.
#[instrument(skip_all)]
pub async fn watch_lines<R>(reader: R, tx: Sender<GeoPoint>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!("⚠️ Unable to read location: {}", err);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<GeoPoint>() {
            Ok(location) => {
                debug!("⌨️ Received location {}", location);
                if tx.send(location).is_err() {
                    break;
                }
            }
            Err(err) => warn!("⚠️ Ignoring location: {}", err),
        }
    }
}
