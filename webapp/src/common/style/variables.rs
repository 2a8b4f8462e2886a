pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2185D0;          /* Primary brand blue */
  --primary-dark: #1678C2;     /* Darker blue for hover states */
  --secondary: #21BA45;        /* Green for upload actions */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-600: #4B5563;
  --neutral-900: #111827;

  /* Background and Surface Colors */
  --background: var(--neutral-100);
  --surface: #FFFFFF;
  --overlay: rgba(0, 0, 0, 0.5);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-disabled: var(--neutral-400);

  /* Border Colors */
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 56px;
  --container-width: 960px;
  --thumbnail-gap: 5px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
