//! Instruction text sent to the model. Each template spells out the JSON
//! shape the decoder expects, since the request carries no response schema.

const IDENTIFICATION_PROMPT: &str = r#"Analyze this image for a Department 56 collectibles inventory.

Identify EVERY Department 56 piece visible in the image.

Known Department 56 collections:
- The Original Snow Village (glossy ceramic, brighter colors)
- Heritage Village Collection (matte porcelain):
  * Dickens' Village (Victorian England)
  * New England Village (Colonial and coastal)
  * Alpine Village (Bavarian and Swiss)
  * Christmas in the City (urban cityscapes)
  * North Pole Series (fantasy, Santa themed)
  * Little Town of Bethlehem
- Specialty series: Halloween, Disney, Grinch, Harry Potter

For EACH piece report:
1. name: the specific name, taken from box text when visible
2. description: short physical description (colors, architecture, notable details)
3. brand: "Department 56", or the actual maker if it is not Department 56
4. item_number: item number or SKU printed on the box, base or label (e.g. "5544-0" or "56.58302")
5. model_number: model number when it differs from the item number
6. retired_status: "Retired", "Active" or "Unknown"
7. estimated_value: estimated market value in USD for the visible condition
8. confidence: your confidence in the identification from 0.0 to 1.0
9. estimation_date: the date of the value estimate as MM/DD/YY

Respond with JSON only, no markdown and no code fences, using exactly this shape:
{
  "items": [
    {
      "name": "specific item name",
      "description": "short physical description",
      "brand": "Department 56",
      "item_number": "5544-0",
      "model_number": null,
      "retired_status": "Retired",
      "estimated_value": 45.00,
      "confidence": 0.92,
      "estimation_date": "12/16/24"
    }
  ]
}

If no Department 56 piece is visible, respond with: {"items": []}
"#;

const DATA_TAG_PROMPT: &str = r#"Read the product data tag or label in this image and extract every field you can.

Look for:
- manufacturer name
- brand name
- model number
- serial number
- production or manufacturing date
- electrical or technical specifications such as voltage and wattage
- country of origin

Respond with JSON only, no markdown and no code fences, using exactly this shape:
{
  "manufacturer": "manufacturer name or null",
  "brand": "brand name or null",
  "model_number": "model number or null",
  "serial_number": "serial number or null",
  "production_date": "date or null",
  "estimated_value": null,
  "additional_info": {
    "voltage": "voltage or null",
    "wattage": "wattage or null",
    "country": "country or null"
  }
}

Use null for every field the image does not show.
"#;

pub fn identification_prompt() -> &'static str {
    IDENTIFICATION_PROMPT
}

pub fn data_tag_prompt() -> &'static str {
    DATA_TAG_PROMPT
}

pub fn barcode_lookup_prompt(code: &str) -> String {
    format!(
        r#"Look up the product identified by barcode/UPC: {code}

If you recognize the product, report:
- product name
- brand or manufacturer
- short description
- model number
- estimated current market value in USD
- product category

Respond with JSON only, no markdown and no code fences, using exactly this shape:
{{
  "found": true,
  "name": "product name or null",
  "description": "description or null",
  "brand": "brand name or null",
  "model_number": "model number or null",
  "estimated_value": 19.99,
  "estimation_date": "12/16/24",
  "category": "category or null"
}}

If you cannot identify this barcode, respond with: {{"found": false}}
"#
    )
}
