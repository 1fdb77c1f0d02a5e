//! Runs the matrix and tensor smoke scenarios and prints their results.

use eigix::{Mat4, Matrix, Tensor3D};

fn main() -> anyhow::Result<()> {
    eigix::init_logger!();

    let scenarios: [(&str, fn() -> anyhow::Result<()>); 2] = [("3D", tensor_3d), ("2D", matrix_2d)];

    let mut failed = 0;
    for (name, scenario) in scenarios {
        match scenario() {
            Ok(()) => println!("[PASS] {name}"),
            Err(e) => {
                log::error!("scenario {name} failed: {e:#}");
                println!("[FAIL] {name}");
                failed += 1;
            }
        }
    }

    anyhow::ensure!(failed == 0, "{failed} scenario(s) failed");
    Ok(())
}

/// Multiplies the vector `[1, 2, 3, 4]` with the 4x4 identity matrix.
fn matrix_2d() -> anyhow::Result<()> {
    let mut vec = Matrix::<i32, 4, 1>::ZERO;
    vec.populate([1, 2, 3, 4])?;

    let mut mat = Mat4::<i32>::ZERO;
    #[rustfmt::skip]
    let identity = [
        1, 0, 0, 0,
        0, 1, 0, 0,
        0, 0, 1, 0,
        0, 0, 0, 1,
    ];
    mat.populate(identity)?;

    let product = mat * vec;
    log::info!("identity * {:?} = {:?}", vec, product);
    println!("{product}");

    anyhow::ensure!(product == vec, "identity product changed the vector: {product:?}");
    Ok(())
}

/// Scales a single-element tensor by its own value.
fn tensor_3d() -> anyhow::Result<()> {
    let mut point = Tensor3D::<i32, 1, 1, 1>::ZERO;
    point.populate([5])?;

    let scaled = point.element(0, 0, 0)? * point;
    log::info!("{:?} scaled by itself = {:?}", point, scaled);
    println!("{scaled}");

    anyhow::ensure!(
        scaled.element(0, 0, 0)? == 25,
        "unexpected scaled tensor: {scaled:?}"
    );
    Ok(())
}
