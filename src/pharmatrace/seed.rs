//! Sample pharmaceutical catalog used to seed the local fallback store,
//! so the system is demoable without a reachable ledger.

use crate::model::Product;

fn product(
    name: &str,
    price: &str,
    qty: &str,
    desc: &str,
    image: &str,
    last_update: &str,
    tracing_info: &str,
) -> Product {
    Product {
        name: name.to_string(),
        price: price.to_string(),
        qty: qty.to_string(),
        desc: desc.to_string(),
        image: image.to_string(),
        last_update: last_update.to_string(),
        tracing_info: tracing_info.to_string(),
    }
}

/// The fixed demo catalog.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "Lipitor (Atorvastatin) 20mg",
            "89.99",
            "500",
            "Cholesterol-lowering medication. HMG-CoA reductase inhibitor for cardiovascular health.",
            "lipitor.svg",
            "2025-09-20",
            "Quality Tested! FDA Approved Batch",
        ),
        product(
            "Tylenol (Acetaminophen) 500mg",
            "12.99",
            "1000",
            "Pain reliever and fever reducer. Over-the-counter analgesic medication.",
            "tylenol.svg",
            "2025-09-21",
            "Distributed! Retail Network Delivery",
        ),
        product(
            "Diovan (Valsartan) 80mg",
            "45.99",
            "300",
            "ACE inhibitor for hypertension and heart failure management.",
            "generic_placeholder.svg",
            "2025-09-19",
            "Manufactured! Quality Verification Pending",
        ),
        product(
            "Tamiflu (Oseltamivir) 75mg",
            "129.99",
            "200",
            "Antiviral medication for influenza treatment and prevention.",
            "generic_placeholder.svg",
            "2025-09-18",
            "Quality Tested! Seasonal Stockpile Preparation",
        ),
        product(
            "Metformin HCl 500mg",
            "8.99",
            "2000",
            "First-line diabetes medication. Biguanide antidiabetic agent.",
            "metformin.svg",
            "2025-09-20",
            "Distributed! Community Pharmacy Network",
        ),
        product(
            "Omeprazole 20mg",
            "15.99",
            "800",
            "Proton pump inhibitor for acid reflux and peptic ulcer treatment.",
            "generic_placeholder.svg",
            "2025-09-22",
            "Manufactured! Packaging in Progress",
        ),
    ]
}
