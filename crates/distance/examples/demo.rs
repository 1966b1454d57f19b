use assign::assign_greedy;
use distance::{DistanceMatrix, MatrixConfig, Phrase};

fn main() {
    let smaller: Vec<Phrase> = ["hello world", "good night"]
        .into_iter()
        .map(Phrase::new)
        .collect();
    let larger: Vec<Phrase> = ["goodnight moon", "hello there", "goodbye world"]
        .into_iter()
        .map(Phrase::new)
        .collect();

    let matrix = DistanceMatrix::build(&smaller, &larger, &MatrixConfig::default())
        .expect("smaller set is not larger");
    for row in 0..matrix.rows() {
        println!("{:>12} {:?}", smaller[row].text(), matrix.row(row));
    }

    let assignment = assign_greedy(&matrix).expect("rows <= columns");
    for (row, column) in assignment.pairs() {
        println!("{}:{}", smaller[row], larger[column]);
    }
    for column in assignment.unassigned_columns() {
        println!("{}:?", larger[column]);
    }
}
