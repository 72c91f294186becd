//! The prompt → geocode → nearby lookup → display pipeline.

use std::io;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::config::{AppConfig, DEFAULT_STOP_COUNT};
use crate::console;
use crate::domain::Postcode;
use crate::postcodes::{LocationError, PostcodeClient};
use crate::tfl::{StopLookupError, StopPointClient};

/// A failure at any stage of a run. Each one ends the run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to read postcode: {0}")]
    Input(#[source] io::Error),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    StopLookup(#[from] StopLookupError),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Runs one postcode lookup end to end.
#[derive(Debug, Clone)]
pub struct Runner {
    postcodes: PostcodeClient,
    stop_points: StopPointClient,
    count: usize,
}

impl Runner {
    pub fn new(postcodes: PostcodeClient, stop_points: StopPointClient) -> Self {
        Self {
            postcodes,
            stop_points,
            count: DEFAULT_STOP_COUNT,
        }
    }

    /// Build both API clients from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, RunError> {
        let postcodes = PostcodeClient::new(config.postcodes.clone())?;
        let stop_points = StopPointClient::new(config.stop_points.clone())?;
        Ok(Self::new(postcodes, stop_points).with_count(config.stop_count))
    }

    /// Set the maximum number of stop points displayed.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Prompt on `output`, read a postcode from `input`, and print the
    /// nearest stop points to `output`.
    ///
    /// Nothing beyond the prompt is written if any stage fails.
    pub async fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<(), RunError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let line = console::prompt_for_postcode(input, output)
            .await
            .map_err(RunError::Input)?;
        let postcode = Postcode::normalize(&line).map_err(LocationError::from)?;

        info!(%postcode, "looking up postcode");
        let location = self.postcodes.location_for(&postcode).await?;

        info!(%location, count = self.count, "looking up nearby stop points");
        let stop_points = self.stop_points.nearest(location, self.count).await?;

        console::display_stop_points(output, &stop_points)
            .await
            .map_err(RunError::Output)
    }
}
