use std::fmt;

use xi_rope::Rope;

use crate::parsing::{ParsedScript, rope::preview};

#[derive(Debug)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
    pub regions: Vec<RegionSnap>,
}

#[derive(Debug)]
pub struct LineSnap {
    pub index: usize,
    pub token: &'static str,
    pub text: String,
}

#[derive(Debug)]
pub struct RegionSnap {
    pub kind: String,
    pub start: usize,
    pub end: usize,
}

pub fn normalize(rope: &Rope, script: &ParsedScript) -> Snap {
    let lines = script
        .lines
        .iter()
        .zip(&script.categories)
        .map(|(line, category)| LineSnap {
            index: line.index,
            token: category.token_name(),
            text: preview(rope, line.span, 60),
        })
        .collect();

    let regions = script
        .regions
        .iter()
        .map(|r| RegionSnap {
            kind: format!("{:?}", r.kind),
            start: r.start,
            end: r.end,
        })
        .collect();

    Snap { lines, regions }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lines:")?;
        for l in &self.lines {
            writeln!(f, "{} {} {:?}", l.index, l.token, l.text)?;
        }
        write!(f, "regions:")?;
        for r in &self.regions {
            write!(f, "\n{} {}..{}", r.kind, r.start, r.end)?;
        }
        Ok(())
    }
}
