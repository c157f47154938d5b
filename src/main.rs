//! alpha_chess - fixed-depth alpha-beta chess engine

use alpha_chess::uci::Uci;

fn main() {
    println!("alpha_chess v0.1.0 - Alpha-Beta Chess Engine");
    println!("Type 'uci' for UCI mode, 'play' for a console game, 'quit' to exit");

    let mut uci = Uci::new();
    uci.run();
}
