//! Basic hexcolor usage.
//!
//! Run with: cargo run --example basic

use hexcolor::hex::{self, HexFormat};
use hexcolor::prelude::*;

fn main() {
    for input in ["Orange", "#abc", "abc7", "#00FFFF77", "clear", "bogus"] {
        let resolution = hex::resolve(Some(input));
        println!(
            "{input:>10} -> {} ({:?})",
            resolution.canonical, resolution.source
        );
    }

    let teal = Color::from_text(Some("teal"));
    println!("hex:            {}", hex(&teal));
    println!("hex with alpha: {}", hex_with_alpha(&teal));
    println!(
        "css style:      {}",
        HexFormat::rgb().prefix(true).uppercase(true).render(teal)
    );

    let gray = RawColor::grayscale(0.5, 1.0);
    println!("grayscale:      {}", hex(&gray));

    match Color::parse("blurple") {
        Ok(color) => println!("parsed {color}"),
        Err(err) => println!("error: {err}"),
    }
}
