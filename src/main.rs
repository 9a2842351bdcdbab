use std::io;

use twochess::Engine;

fn main() -> anyhow::Result<()> {
    twochess::print_engine_info();
    twochess::print_binary_info();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut engine = Engine::new(&mut input, &mut output);
    engine.run()
}
