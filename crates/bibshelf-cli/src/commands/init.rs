//! Module for writing a bibshelf configuration.

use super::*;

/// Arguments for [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitArgs {
  /// Library file to record in the configuration
  #[arg(long)]
  pub library: Option<PathBuf>,
}

/// Function for the [`Commands::Init`] in the CLI.
///
/// The library location is taken from `--library`, then the global `--path`, and otherwise
/// the platform default after confirmation. The library file itself is created by the first
/// change.
pub fn init<I: UserInteraction>(
  interaction: &I,
  config_path: &Path,
  config: Config,
  args: InitArgs,
) -> Result<()> {
  let InitArgs { library } = args;

  let library_path = match library {
    Some(path) => path,
    None => {
      let default_path = Config::default_library_path();
      if !interaction.confirm(&format!(
        "Would you like to keep your library at the default path {}?",
        default_path.display()
      ))? {
        interaction.reply(ResponseContent::Info(
          "Please pass in your intended library location using --library",
        ))?;
        return Ok(());
      }
      default_path
    },
  };

  if config_path.exists()
    && !interaction.confirm(&format!(
      "A configuration already exists at {}, do you want to overwrite it?",
      config_path.display()
    ))?
  {
    interaction.reply(ResponseContent::Info("Keeping the existing configuration"))?;
    return Ok(());
  }

  let config = config.with_library_path(&library_path);
  config.save(config_path)?;
  interaction.reply(ResponseContent::Success(&format!(
    "Created bibshelf configuration with\nConfig path: {}\nLibrary path: {}",
    config_path.display(),
    config.library_path.display(),
  )))?;
  Ok(())
}
