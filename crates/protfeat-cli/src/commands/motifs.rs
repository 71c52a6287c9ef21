use crate::error::Result;
use protfeat::core::descriptors::motif::MotifSet;
use std::io::Write;

pub fn run() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_motifs(&MotifSet::default(), &mut stdout)?;
    Ok(())
}

fn write_motifs(motifs: &MotifSet, out: &mut impl Write) -> std::io::Result<()> {
    for motif in motifs.motifs() {
        writeln!(
            out,
            "{:<10}{:<10}{}",
            motif.pattern(),
            motif.kind().to_string(),
            motif.key()
        )?;
    }
    out.flush()
}
