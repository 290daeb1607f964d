//! Grading prompt assembly.
//!
//! Builds the single natural-language prompt sent to the model for one
//! submission. Pure string work: deterministic for identical inputs, no I/O.
//! The student's code is embedded verbatim inside a code fence; no escaping is
//! applied beyond the fence delimiters, so code that itself contains a fence
//! can break out of the block.

use crate::types::{GradingConfig, GradingMode};

/// Build the full grading prompt for a submission.
///
/// Both modes embed the rubric and the fenced source code. `Logic` mode asks
/// the model to judge correctness against the instructions only; `Output` mode
/// additionally embeds the expected console output and asks the model to
/// simulate and diff the program's output before applying the rubric.
pub fn build_grading_prompt(student_code: &str, rubric: &str, config: &GradingConfig) -> String {
    let (prompt_context, analysis_instructions) = match config.grading_mode {
        GradingMode::Logic => (
            format!(
                r#"
The student's code should be evaluated based on its logic, correctness, and adherence to the assignment's instructions, not on matching a specific console output. For example, for a calculator assignment, you must check if the calculations are performed correctly.

**ASSIGNMENT INSTRUCTIONS:**
---
{}
---"#,
                config.instructions
            ),
            r#"
1.  **Analyze Code:** Carefully read the student's Java code to understand its logic, structure, and functionality.
2.  **Verify Correctness:** Determine if the code correctly implements the logic for the assignment based on the provided "ASSIGNMENT INSTRUCTIONS". This is not about matching a specific output, but about whether the code would work as intended.
3.  **Apply Rubric:** Use the "SCORING RUBRIC" to assign a score based on the code's correctness, structure, and adherence to instructions.
4.  **Generate Feedback:** Provide clear, constructive feedback for the student and a detailed reasoning for the score for the teacher.
5.  **Format Response:** Return your complete evaluation in the specified JSON format. The 'maxScore' should be the highest possible score derivable from the rubric."#
                .to_string(),
        ),
        GradingMode::Output => (
            format!(
                r#"
**ASSIGNMENT INSTRUCTIONS:**
---
{}
---
**EXPECTED CONSOLE OUTPUT:**
---
{}
---"#,
                config.instructions, config.expected_output
            ),
            r#"
1.  **Analyze Code:** Carefully read the student's Java code to understand its logic, structure, and what it will print to the console.
2.  **Simulate Output:** Mentally execute the code to determine its output.
3.  **Compare Outputs:** Compare the simulated output of the student's code with the "EXPECTED CONSOLE OUTPUT".
4.  **Check Instructions:** Verify if the code adheres to the "ASSIGNMENT INSTRUCTIONS".
5.  **Apply Rubric:** Use the "SCORING RUBRIC" to assign a score based on the comparison and instruction adherence.
6.  **Generate Feedback:** Provide clear, constructive feedback for the student and a detailed reasoning for the score for the teacher.
7.  **Format Response:** Return your complete evaluation in the specified JSON format. The 'maxScore' should be the highest possible score derivable from the rubric."#
                .to_string(),
        ),
    };

    format!(
        r#"
You are an expert Java programming instructor AI. Your task is to grade a student's Java code submission for an assignment titled "{title}".

**SCORING RUBRIC:**
---
{rubric}
---
{prompt_context}

**STUDENT'S JAVA CODE:**
---
```java
{student_code}
```
---

**INSTRUCTIONS FOR AI:**
{analysis_instructions}
"#,
        title = config.title,
        rubric = rubric,
        prompt_context = prompt_context,
        student_code = student_code,
        analysis_instructions = analysis_instructions,
    )
}
