use dns_mcp_api::McpRouter;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

const RESPONSE_CHANNEL_CAPACITY: usize = 256;

pub async fn serve_stdio(router: McpRouter) -> io::Result<()> {
    info!("MCP server listening on stdio");
    serve(router, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    Ok(())
}

/// Read one JSON-RPC message per line and answer each in its own task.
///
/// A single writer owns `writer`, so replies never interleave. Returns the
/// writer once input hits EOF and every in-flight reply has been written.
pub async fn serve<R, W>(router: McpRouter, mut reader: R, writer: W) -> io::Result<W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<String>(RESPONSE_CHANNEL_CAPACITY);

    let writer_task = tokio::spawn(async move {
        let mut writer = writer;
        while let Some(reply) = rx.recv().await {
            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok::<W, io::Error>(writer)
    });

    let mut in_flight = JoinSet::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf).into_owned();

        let router = router.clone();
        let tx = tx.clone();
        in_flight.spawn(async move {
            if let Some(reply) = router.handle_line(&line).await {
                if tx.send(reply).await.is_err() {
                    warn!("Output closed, dropping response");
                }
            }
        });

        while let Some(finished) = in_flight.try_join_next() {
            if let Err(e) = finished {
                error!(error = %e, "Request task failed");
            }
        }
    }

    debug!(pending = in_flight.len(), "Input closed, draining in-flight requests");
    while let Some(finished) = in_flight.join_next().await {
        if let Err(e) = finished {
            error!(error = %e, "Request task failed");
        }
    }

    drop(tx);
    writer_task.await.map_err(io::Error::other)?
}
