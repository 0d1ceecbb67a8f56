use chi2fit::gof::Tally;
use std::io::{self, BufRead};

/// Read answers from stdin, one or more per line, and re-test after each line
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sides: Vec<String> = std::env::args().skip(1).collect();
    let sides = if sides.is_empty() {
        (1..=6).map(|x: u8| x.to_string()).collect()
    } else {
        sides
    };

    let mut tally = Tally::uniform(sides)?;
    let mut answers = Vec::new();

    for line in io::stdin().lock().lines() {
        answers.push(line?);
        let res = tally.replace_from_text(&answers.join(" "))?;
        print!("{} p = {:.5}", tally.len(), res.p);
        match res.warning {
            Some(warning) => println!(" ({})", warning),
            None => println!(),
        }
    }

    Ok(())
}
