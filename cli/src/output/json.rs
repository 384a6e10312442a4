use anyhow::Result;
use blot_opt::Ranking;
use std::io::Write;

pub fn write_json_report<W: Write>(w: &mut W, ranking: &Ranking) -> Result<()> {
    let json = blot_opt::serialize_ranking(ranking)?;
    writeln!(w, "{}", json)?;
    Ok(())
}
