use tajimas_d::adapter::fasta::read_sequences;
use tajimas_d::stats::{GlobalStatistic, TajimaD};
use tajimas_d::Alignment;

static FASTA_FILE: &str = r#">hap0
ACGTACGTTAGCATGCAAGT
>hap1
ACGTACGTTAGCATGCAAGT
>hap2
ACGAACGTTAGCATGCAAGT
>hap3
ACGTACGTTAGGATGCAAGT
>hap4
ACGTACGTTAGCATGCTAGT
>hap5
ACGAACGTTAGCATGCAAGT
"#;

fn main() {
    // or read a file yourself with read_sequences_from_path
    let sequences = read_sequences(FASTA_FILE.as_bytes()).unwrap();

    let alignment = Alignment::new(&sequences).unwrap();
    for pd in alignment.pairwise_differences() {
        println!("{:?}: {}", pd.pair, pd.differences);
    }

    let d = TajimaD::from_alignment(&alignment).unwrap();
    println!("segregating sites: {}", d.segregating_sites());
    println!("pi: {}", d.k_hat().as_raw());
    println!("watterson: {}", d.theta().as_raw());
    println!("tajima's d: {}", d.as_raw());
}
