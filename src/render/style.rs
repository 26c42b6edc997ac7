/// Horizontal padding of the content column. Full-width blocks bleed out by
/// exactly this much on each side.
pub const CONTENT_GUTTER_PX: u32 = 20;

/// Max width of the document and of constrained blocks.
pub const MAX_CONTENT_WIDTH_PX: u32 = 600;

pub const FONT_LINKS: &str = r#"<link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Open+Sans:wght@400;500;600;700&family=Roboto:wght@400;500;700&family=Lato:wght@400;700&family=Poppins:wght@400;500;600;700&family=Source+Sans+Pro:wght@400;600;700&family=Nunito:wght@400;600;700&family=Work+Sans:wght@400;500;600&family=Montserrat:wght@400;500;600;700&family=Merriweather:wght@400;700&family=Playfair+Display:wght@400;500;600;700&display=swap" rel="stylesheet">"#;

/// Works around email-client rendering bugs (greyed-out emoji, inherited
/// colour overrides, narrow viewports). Emitted as-is.
pub const GLOBAL_CSS: &str = r#"
        /* Keep emoji in colour */
        * {
            -webkit-text-fill-color: initial;
        }

        emoji, span[role="img"], .emoji {
            -webkit-text-fill-color: initial !important;
            color: initial !important;
        }

        * {
            filter: none !important;
        }

        body {
            text-rendering: optimizeLegibility;
            -webkit-font-feature-settings: "liga" 1, "kern" 1;
            font-feature-settings: "liga" 1, "kern" 1;
            -webkit-font-smoothing: antialiased;
            -moz-osx-font-smoothing: grayscale;
        }

        p, div, span, h1, h2, h3, h4, h5, h6 {
            -webkit-text-fill-color: initial;
        }

        ::-webkit-text-fill-color {
            -webkit-text-fill-color: initial !important;
        }

        :root {
            --text: initial !important;
            --text-secondary: initial !important;
            --primary: initial !important;
            --accent: initial !important;
        }

        @font-face {
            font-family: 'Apple Color Emoji';
            src: local('Apple Color Emoji');
        }

        @font-face {
            font-family: 'Segoe UI Emoji';
            src: local('Segoe UI Emoji');
        }

        .brand-header {
            font-family: 'Montserrat', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif !important;
        }

        .brand-header .brand-prefix-gradient {
            background: linear-gradient(90deg, #6c63ff, #4ecdc4) !important;
            -webkit-background-clip: text !important;
            -webkit-text-fill-color: transparent !important;
            background-clip: text !important;
            color: transparent !important;
        }

        .full-width {
            margin-left: -20px;
            margin-right: -20px;
            width: calc(100% + 40px);
            border-radius: 0;
            box-sizing: border-box;
        }

        .constrained-width {
            max-width: 600px;
            margin-left: auto;
            margin-right: auto;
            box-sizing: border-box;
        }

        @media only screen and (max-width: 600px) {
            body {
                padding: 10px !important;
            }
            .content {
                padding: 0 15px !important;
            }
            .full-width {
                margin-left: -15px !important;
                margin-right: -15px !important;
                width: calc(100% + 30px) !important;
            }
            .constrained-width {
                padding-left: 15px !important;
                padding-right: 15px !important;
            }
            .footer-block {
                padding: 15px !important;
                font-size: 11px !important;
            }
            h1 {
                font-size: 2rem !important;
            }
            p {
                font-size: 0.9rem !important;
            }
        }

        @media only screen and (max-width: 480px) {
            .content {
                padding: 0 10px !important;
            }
            .full-width {
                margin-left: -10px !important;
                margin-right: -10px !important;
                width: calc(100% + 20px) !important;
            }
            .constrained-width {
                padding-left: 10px !important;
                padding-right: 10px !important;
            }
            h1 {
                font-size: 1.8rem !important;
            }
            p {
                font-size: 0.85rem !important;
            }
        }
    "#;
