//! Fit a decision tree on a small fixed dataset and print its predictions.
use sapling::DecisionTreeClassifier;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Sample dataset (dummy data)
    let x_train = [[2., 4.], [5., 1.], [3., 3.], [7., 2.], [8., 9.]];
    let y_train = [0, 1, 0, 1, 1];

    let mut model = DecisionTreeClassifier::default();
    model.fit(&x_train, &y_train)?;

    let x_test = [[4., 5.], [6., 3.]];
    let predictions = model.predict(&x_test)?;
    println!("Predictions: {:?}", predictions);

    Ok(())
}
