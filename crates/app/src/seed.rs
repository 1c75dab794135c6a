#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Fixed(String),
    Random,
}

/// Picks the seed mode from the process arguments: `--seed <text>` or
/// `--seed=<text>` fixes the seed, otherwise every generation derives one.
pub fn resolve_seed_from_args(args: &[String]) -> Result<SeedChoice, String> {
    let mut selected_seed = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        if argument == "--seed" {
            let Some(value) = args.get(index + 1) else {
                return Err("missing value for --seed".to_string());
            };
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(value.clone());
            index += 2;
            continue;
        }

        if let Some(value) = argument.strip_prefix("--seed=") {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(value.to_string());
        }
        index += 1;
    }

    Ok(match selected_seed {
        Some(seed) => SeedChoice::Fixed(seed),
        None => SeedChoice::Random,
    })
}
