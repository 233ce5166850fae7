use clap::ArgMatches;

use trisat::{
    config::{Config, Noise},
    types::err::{self},
};

/// A configuration from the defaults, revised by any options given as arguments.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ConfigError> {
    let mut the_config = Config::default();

    if let Ok(Some(restarts)) = args.try_get_one::<usize>("max_restarts") {
        the_config.gsat.max_restarts.set(*restarts)?
    };

    if let Ok(Some(climbs)) = args.try_get_one::<usize>("max_climbs") {
        the_config.gsat.max_climbs.set(*climbs)?
    };

    if let Ok(Some(noise)) = args.try_get_one::<Noise>("noise") {
        the_config.walksat.noise.set(*noise)?
    };

    if let Ok(Some(flips)) = args.try_get_one::<usize>("max_flips") {
        the_config.walksat.max_flips.set(*flips)?
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed = *seed
    };

    Ok(the_config)
}
