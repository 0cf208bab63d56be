use keypad_chain::*;

/// Chain-depth presets matching the two questions the door poses: two directional hops for the
/// short chain, twenty-five for the long one.
const LEVELS_PRESETS: [u8; 2_usize] = [2_u8, 25_u8];

fn main() {
    let args: Args = Args::parse();

    let Some(code_list) = args.try_to_intermediate::<CodeList>() else {
        return;
    };

    for levels in args
        .levels
        .map_or_else(|| LEVELS_PRESETS.to_vec(), |levels| vec![levels])
    {
        dbg!(levels);
        dbg!(code_list.complexity_sum(levels));

        if args.verbose {
            let mut counter: PressCounter = PressCounter::new();

            for code in code_list.codes() {
                match code.presses(&mut counter, levels) {
                    Ok(presses) => {
                        dbg!(
                            Key::string_from_iter(code.keys().iter().copied()),
                            presses,
                            presses * code.numeric_part()
                        );
                    }
                    Err(error) => eprintln!("skipping code: {error:?}"),
                }
            }
        }
    }
}
