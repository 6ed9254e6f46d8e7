pub mod location_inputs;
pub mod date_inputs;
pub mod detail_inputs;

const SECTION_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 8px;
    padding: 20px;
    border-bottom: 8px solid #F4F4F4;
";

const SECTION_TITLE_STYLE: &str = "font-size: 16px; font-weight: 600;";

const TEXT_INPUT_STYLE: &str = "
    padding: 12px;
    border: 1px solid #D9D9D9;
    border-radius: 6px;
    font-size: 14px;
    outline: none;
";
