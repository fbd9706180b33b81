//! Tag sentences read from stdin, one per line.
//!
//! ```sh
//! cargo run --example tag_sentences -- path/to/gazetteers < sentences.txt
//! ```

use gazetag::prelude::*;
use std::io::BufRead;

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .ok_or_else(|| GazetagError::invalid_input("usage: tag_sentences <GAZETTEER_DIR>"))?;

    let config = ConfigBuilder::development()
        .with_gazetteer_dir(&dir)
        .build()?;
    let (tagger, _guard) = gazetag::init(&config)?;

    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(|e| GazetagError::Other(e.to_string()))?;
        let sentence = tagger.tag_text(&line)?;

        let rendered: Vec<String> = sentence
            .pairs()
            .map(|(token, tag)| format!("{token}/{tag}"))
            .collect();
        println!("{}", rendered.join(" "));
    }

    Ok(())
}
