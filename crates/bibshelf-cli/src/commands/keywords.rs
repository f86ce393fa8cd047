//! Module for the keyword overview.

use super::*;

/// Function for the [`Commands::Keywords`] in the CLI.
pub fn keywords<I: UserInteraction>(interaction: &I, library: &Library) -> Result<()> {
  interaction.reply(ResponseContent::Keywords(&library.keyword_counts()))
}
