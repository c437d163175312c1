use strrand_core::charset::NamedCharset;
use strrand_core::generator::Generator;
use strrand_core::input::GenerationInput;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=trace to see what the library does
    env_logger::init();

    // One helper per predefined charset
    println!("binary:            {}", strrand_core::binary(16));
    println!("octal:             {}", strrand_core::octal(16));
    println!("decimal:           {}", strrand_core::decimal(16));
    println!("hexadecimal:       {}", strrand_core::hexadecimal(16));
    println!("capital letters:   {}", strrand_core::capital_letters(16));
    println!("lowercase letters: {}", strrand_core::lowercase_letters(16));
    println!("special letters:   {}", strrand_core::special_letters(16));
    println!("base62:            {}", strrand_core::base62(16));
    println!("base64:            {}", strrand_core::base64(16));
    println!("letters:           {}", strrand_core::letters(16));
    println!("default:           {}", strrand_core::default_string(16));

    // Zero or negative lengths are not errors, they give an empty string
    assert!(strrand_core::letters(-1).is_empty());

    // Custom charset, any Unicode characters are allowed
    println!("custom:            {}", strrand_core::generate_string(16, Some("♠♥♦♣")));

    // Errors can be handled instead of panicking
    match strrand_core::try_generate_string(4, Some("")) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty charset refused: {}", e),
    }

    // A generator decodes its charset once and can be reused
    let generator = Generator::from_named(NamedCharset::Base62);
    for i in 0..3 {
        println!("Generated token {}: {}", i + 1, generator.try_generate(32)?);
    }

    // Charsets can be selected by name, like a configuration file would
    let mut input = GenerationInput::new(8);
    input.count = 5;
    input.set_charset_by_name("hexadecimal")?;

    match input.set_charset_by_name("klingon") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    // Batches are spread over all cores
    for (i, s) in input.generate()?.iter().enumerate() {
        println!("Batch string {}: {}", i + 1, s);
    }

    log::info!("Done");
    Ok(())
}
