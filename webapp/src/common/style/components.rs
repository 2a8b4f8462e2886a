pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:disabled {
  cursor: default;
  opacity: 0.6;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover:enabled {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-upload {
  background-color: var(--secondary);
  color: white;
}

/* Segments */
.segment {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-4);
  margin-bottom: var(--space-4);
}

.segment h3 {
  margin-bottom: var(--space-3);
}

/* Form Elements */
.inline-form {
  display: flex;
  gap: var(--space-2);
}

.form-input {
  flex: 1;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-input:focus {
  border-color: var(--primary);
  outline: none;
}

/* Divided list */
.divided-list {
  list-style: none;
}

.divided-list li {
  padding: var(--space-3) 0;
  border-top: 1px solid var(--border);
}

.divided-list li:first-child {
  border-top: none;
}

/* Skeleton loader */
.skeleton {
  background: linear-gradient(
    90deg,
    var(--neutral-200) 25%,
    var(--neutral-300) 50%,
    var(--neutral-200) 75%
  );
  background-size: 200% 100%;
  animation: skeleton-loading 1.5s infinite;
  border-radius: var(--radius-md);
  height: 1em;
}

@keyframes skeleton-loading {
  0% { background-position: -200% 0; }
  100% { background-position: 200% 0; }
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-4);
}

.status {
  color: var(--text-secondary);
  padding: var(--space-2) 0;
}
"#;
