use crate::domains::intake::{UploadedImage, VendorSelection};

use super::{ComparisonError, VendorFallbackPolicy};

/// Vendors substituted when the selection is not a list and the policy allows it.
pub const DEFAULT_VENDORS: [&str; 3] = ["Flipkart", "Amazon", "Myntra"];

/// Target market the prices must be realistic for.
pub const LOCATION: &str = "India,Andhra Pradesh,Visakhapatnam";

/// Formatting exemplars for vendor URLs. They are not the product being searched.
const EXAMPLE_VENDOR_URLS: &str = "\
- for Flipkart: https://www.flipkart.com/dot-key-sunscreen-spf-50-pa-vitamin-c-e-super-bright-waterlight-even-toned-glowing-skin/p/itm4a507f1a83904?pid=SNRGJZUDJZKGH9HF&lid=LSTSNRGJZUDJZKGH9HF0UBOAH&marketplace=FLIPKART&q=Dot+%26+Key+Vitamin+C+%2B+E+Super+Bright+Sunscreen+SPF+50%2B&store=g9b%2Fema%2F5la%2Fxrh&spotlightTagId=default_BestsellerId_g9b%2Fema%2F5la%2Fxrh&srno=s_1_1&otracker=search&otracker1=search&fm=Search&iid=512ab41c-e9c5-421e-961e-9444a67228a2.SNRGJZUDJZKGH9HF.SEARCH&ppt=sp&ppn=sp&ssid=ms8tgyo99c0000001767503979733&qH=9f546c3f2ca672cb
- for Amazon: https://www.amazon.in/Vitamin-Sunscreen-Water-Light-Protection-Absorption/dp/B0BLK4YRSN/ref=sr_1_5?crid=2RNDT1D985BP1&dib=eyJ2IjoiMSJ9.d3VEkjTRnz4M3BY8sAt1p35PwXoKt8PjuoqoxPBXMrbkJS5m1ZA_JfNLZHINYkkV2gyvzPh1n_1Q5Tsjs3U2AFCuFLiLxGpTrEa-XzsZ1w5aQeUUTx9pA-lZyGBuNA5VYm8AeXSn9wOtkFdP_h93CMgEtsrhaXosNtFBZxbdsLZwY5wH-sI0RsAGc-gzwmp_YANcRGREnAwWC6nmo3kLra8obLA1d4AFqMoWk014So3j-IxmwFePzmkChgN1HoSH0inT7DWpsXYIXjPArxL4h_kmnJhZNB-t54ZonDRq2VQ.yruf0OD6pSzy9e-h2UFrfYsgErAA-HGlXzpAxUZjiRA&dib_tag=se&keywords=dot%2Band%2Bkey%2Bvitamin%2Bc%2Bsunscreen&qid=1767705496&sprefix=dot%2Band%2Bkey%2Bvitamin%2Bc%2Bs%2Caps%2C426&sr=8-5&th=1
- for Myntra: https://www.myntra.com/shrug/sassafras/sassafras-open-front-longline-shrug/31471738/buy
- for croma: https://www.croma.com/black-decker-bxra0901in-2500w-oil-filled-radiator-room-heater-with-9-fins-adjustable-thermostat/p/255749";

/// Turn the caller's selection into the vendor list used for the prompt and
/// for allowlist filtering.
pub fn resolve_vendors(
    selection: &VendorSelection,
    policy: VendorFallbackPolicy,
) -> Result<Vec<String>, ComparisonError> {
    match (selection, policy) {
        (VendorSelection::Listed(names), _) => Ok(names.clone()),
        (VendorSelection::Unlisted(_), VendorFallbackPolicy::Substitute) => {
            tracing::warn!("Vendor selection is not a list, substituting default vendors");
            Ok(DEFAULT_VENDORS.iter().map(|v| v.to_string()).collect())
        }
        (VendorSelection::Unlisted(value), VendorFallbackPolicy::Reject) => {
            Err(ComparisonError::InvalidVendors(value.to_string()))
        }
    }
}

/// Comma-joined vendor names as they appear in the prompt.
pub fn vendors_text(vendors: &[String]) -> String {
    vendors.join(", ")
}

fn describe_image(image: Option<&UploadedImage>) -> String {
    match image {
        Some(image) => format!(
            "Attached image: {} ({})",
            image.file_name().unwrap_or("unnamed upload"),
            image.mime_type()
        ),
        None => "none".to_string(),
    }
}

/// Build the full instruction block sent to the model.
///
/// `product_name` is embedded verbatim.
pub fn build_prompt(
    product_name: &str,
    vendors_text: &str,
    image: Option<&UploadedImage>,
) -> String {
    let image_description = describe_image(image);

    format!(
        r#"You are a smart shopping assistant for an e-commerce price comparison system.

Product to search:
"{product_name}"

Allowed vendors (use ONLY these vendors):
{vendors_text}

Task:
Generate a realistic and conservative price comparison for the given product across the allowed vendors.

Rules:
- Use only the vendors provided in the allowed vendors list.
- If a vendor does not sell this product, exclude that vendor.
- Do NOT invent vendors or product variants.
- Prices must be realistic and consistent with the Indian e-commerce market.
- If the exact product listing URL is unknown, use a valid vendor search URL for the product.
- If pricing is uncertain, provide a conservative market estimate.
- Do NOT fabricate coupons; include them only if commonly known, otherwise use null.
- If the product cannot be confidently identified, return an empty deals array.

Image Handling (if image provided):
    {image_description}
- Infer the closest identifiable product name.
- If the image is unclear, return empty deals.

Return Format:
Return ONLY raw JSON. Do NOT include explanations, markdown, or comments.

JSON Structure:
{{
  "bestDeal": {{
    "productName": "Exact or Closest Identifiable Product Name",
    "bestPrice": "₹XX,XXX",
    "bestVendor": "Vendor Name",
    "bestVendorLink": "Valid product or search URL"
  }},
  "deals": [
    {{
      "vendor": "Vendor Name",
      "price": "₹XX,XXX",
      "rating": "4.X",
      "coupon": null,
      "couponTag": null,
      "logoUrl": "Known vendor logo URL or placeholder",
      "vendorUrl": "Valid product or search URL",
      "buttonStyle": {{}}
    }}
  ]
}}

Location specific search:
{LOCATION}

Example urls of vendorUrls:
{EXAMPLE_VENDOR_URLS}

Constraints:
- Output must be valid JSON.
- Use null instead of fake or unknown data.
- Do not include vendors outside the allowed list.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VENDORS_HEADER: &str = "Allowed vendors (use ONLY these vendors):\n";

    fn allowed_vendors_line(prompt: &str) -> &str {
        let start = prompt.find(VENDORS_HEADER).unwrap() + VENDORS_HEADER.len();
        let rest = &prompt[start..];
        &rest[..rest.find('\n').unwrap()]
    }

    fn listed(names: &[&str]) -> VendorSelection {
        VendorSelection::Listed(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn vendor_line_is_exactly_the_joined_list() {
        let cases: [&[&str]; 4] = [
            &[],
            &["Amazon"],
            &["Flipkart", "Amazon"],
            &["Croma", "Myntra", "Reliance Digital", "Tata CLiQ"],
        ];

        for names in cases {
            let vendors =
                resolve_vendors(&listed(names), VendorFallbackPolicy::Substitute).unwrap();
            let prompt = build_prompt("Phone", &vendors_text(&vendors), None);

            assert_eq!(allowed_vendors_line(&prompt), names.join(", "));
        }
    }

    #[test]
    fn listed_order_is_kept() {
        let vendors = resolve_vendors(
            &listed(&["Myntra", "Amazon", "Flipkart"]),
            VendorFallbackPolicy::Reject,
        )
        .unwrap();
        assert_eq!(vendors_text(&vendors), "Myntra, Amazon, Flipkart");
    }

    #[test]
    fn unlisted_selection_substitutes_default_text() {
        let selection = VendorSelection::Unlisted(json!({"vendor": "Amazon"}));
        let vendors = resolve_vendors(&selection, VendorFallbackPolicy::Substitute).unwrap();
        let prompt = build_prompt("Phone", &vendors_text(&vendors), None);

        assert_eq!(allowed_vendors_line(&prompt), "Flipkart, Amazon, Myntra");
    }

    #[test]
    fn unlisted_selection_is_rejected_under_reject_policy() {
        let selection = VendorSelection::Unlisted(json!("Amazon"));
        let err = resolve_vendors(&selection, VendorFallbackPolicy::Reject).unwrap_err();

        assert!(matches!(err, ComparisonError::InvalidVendors(ref v) if v == "\"Amazon\""));
    }

    #[test]
    fn prompt_embeds_product_rules_and_location() {
        let prompt = build_prompt("Dot & Key Sunscreen SPF 50", "Flipkart, Amazon", None);

        assert!(prompt.contains("\"Dot & Key Sunscreen SPF 50\""));
        assert!(prompt.contains("Prices must be realistic and consistent with the Indian e-commerce market."));
        assert!(prompt.contains("Location specific search:\nIndia,Andhra Pradesh,Visakhapatnam"));
        assert!(prompt.contains("\"buttonStyle\": {}"));
        assert!(prompt.contains("- for croma: https://www.croma.com/"));
        assert!(prompt.contains(
            "ref=sr_1_5?crid=2RNDT1D985BP1&dib=eyJ2IjoiMSJ9.d3VEkjTRnz4M3BY8sAt1p35PwXoKt8PjuoqoxPBXMrbkJS5m1ZA_JfNLZHINYkkV2gyvzPh1n_1Q5Tsjs3U2AFCuFLiLxGpTrEa-XzsZ1w5aQeUUTx9pA-lZyGBuNA5VYm8AeXSn9wOtkFdP_h93CMgEtsrhaXosNtFBZxbdsLZwY5wH-sI0RsAGc-gzwmp_YANcRGREnAwWC6nmo3kLra8obLA1d4AFqMoWk014So3j-IxmwFePzmkChgN1HoSH0inT7DWpsXYIXjPArxL4h_kmnJhZNB-t54ZonDRq2VQ.yruf0OD6pSzy9e-h2UFrfYsgErAA-HGlXzpAxUZjiRA&dib_tag=se"
        ));
        assert!(prompt.contains("Image Handling (if image provided):\n    none\n"));
    }

    #[test]
    fn prompt_describes_attached_image() {
        let dir = tempfile::tempdir().unwrap();
        let file = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
        let image = UploadedImage::new(file, "image/jpeg", Some("bottle.jpg".into()), 12);

        let prompt = build_prompt("", "Amazon", Some(&image));

        assert!(prompt.contains("Product to search:\n\"\"\n"));
        assert!(prompt.contains("Attached image: bottle.jpg (image/jpeg)"));
    }
}
